use crate::behavior::{Behavior, WorldView};
use crate::handle::ParticleId;
use crate::particle::Particle;
use crate::v2;

const DEFAULT_MIN_DISTANCE: f32 = 1.;

/// Inverse-square attraction toward a target particle; the distance
/// is clamped near zero to avoid the singularity.
#[derive(Clone, Debug)]
pub struct Attract {
	target: ParticleId,
	strength: f32,
	radius_sq: f32,
	min_distance_sq: f32,
}

impl Attract {
	pub fn new(target: ParticleId, strength: f32) -> Self {
		Self {
			target,
			strength,
			radius_sq: f32::INFINITY,
			min_distance_sq: DEFAULT_MIN_DISTANCE * DEFAULT_MIN_DISTANCE,
		}
	}

	pub fn with_radius(mut self, radius: f32) -> Self {
		self.radius_sq = radius * radius;
		self
	}

	pub fn with_min_distance(mut self, min_distance: f32) -> Self {
		let floor = DEFAULT_MIN_DISTANCE * DEFAULT_MIN_DISTANCE;
		self.min_distance_sq = (min_distance * min_distance).max(floor);
		self
	}
}

impl Behavior for Attract {
	fn apply(&mut self, id: ParticleId, p: &mut Particle, view: &WorldView<'_>) {
		if p.locked || id == self.target {
			return;
		}
		let target_pos = match view.position_of(self.target) {
			Some(pos) => pos,
			None => return,
		};
		let dir = target_pos - p.pos;
		let dist_sq = dir.magnitude_squared();
		if dist_sq == 0. || dist_sq > self.radius_sq {
			return;
		}
		let limited_dist_sq = dist_sq.max(self.min_distance_sq);
		p.add_force(v2::normalize_to(dir, self.strength / limited_dist_sq));
	}
}
