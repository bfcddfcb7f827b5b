use dyn_clone::DynClone;

use crate::particle::Particle;
use crate::v2;
use crate::V2;

/// Positional correction applied to a particle after integration and
/// after the final spring relaxation pass.
pub trait Constraint: DynClone {
	fn apply(&self, p: &mut Particle);
}

dyn_clone::clone_trait_object!(Constraint);

/// Keeps a particle inside a circle, accounting for its own radius.
#[derive(Clone, Debug)]
pub struct CircularConstraint {
	center: V2,
	radius: f32,
}

impl CircularConstraint {
	pub fn new(center: V2, radius: f32) -> Self {
		Self { center, radius }
	}
}

impl Constraint for CircularConstraint {
	fn apply(&self, p: &mut Particle) {
		let dp = p.pos - self.center;
		let max_dist = self.radius - p.radius;
		if dp.magnitude_squared() < max_dist * max_dist {
			return;
		}
		p.pos = self.center + v2::normalize_or_zero(dp) * max_dist;
	}
}
