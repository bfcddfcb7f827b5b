use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::behavior::{Behavior, WorldView};
use crate::handle::ParticleId;
use crate::particle::Particle;
use crate::v2;

#[derive(Clone, Debug)]
pub struct Jitter {
	max_distance: f32,
	rng: StdRng,
}

impl Jitter {
	pub fn new(max_distance: f32) -> Self {
		Self {
			max_distance,
			rng: StdRng::from_entropy(),
		}
	}

	pub fn with_seed(mut self, seed: u64) -> Self {
		self.rng = StdRng::seed_from_u64(seed);
		self
	}
}

impl Behavior for Jitter {
	fn apply(&mut self, _id: ParticleId, p: &mut Particle, _view: &WorldView<'_>) {
		if p.locked || self.max_distance <= 0. {
			return;
		}
		let angle = self.rng.gen_range(0.0..std::f32::consts::TAU);
		let magnitude = self.rng.gen_range(0.0..self.max_distance);
		p.add_force(v2::from_angle(angle) * magnitude);
	}
}
