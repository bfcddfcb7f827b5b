use crate::V2;

pub const EPSILON: f32 = 1e-6;

/// Normalize, falling back to the zero vector near zero magnitude.
pub fn normalize_or_zero(v: V2) -> V2 {
	v.try_normalize(EPSILON).unwrap_or_else(V2::zeros)
}

pub fn normalize_to(v: V2, len: f32) -> V2 {
	normalize_or_zero(v) * len
}

pub fn rotate(v: V2, angle: f32) -> V2 {
	nalgebra::Rotation2::new(angle) * v
}

pub fn from_angle(angle: f32) -> V2 {
	V2::new(angle.cos(), angle.sin())
}

pub fn perp(v: V2) -> V2 {
	V2::new(-v.y, v.x)
}
