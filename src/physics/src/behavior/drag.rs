use crate::behavior::{Behavior, WorldView};
use crate::handle::ParticleId;
use crate::particle::Particle;
use crate::v2;

/// Quadratic drag: force grows with speed squared.
#[derive(Clone, Debug)]
pub struct Drag {
	coefficient: f32,
}

impl Drag {
	pub fn new(coefficient: f32) -> Self {
		Self { coefficient }
	}
}

impl Behavior for Drag {
	fn apply(&mut self, _id: ParticleId, p: &mut Particle, _view: &WorldView<'_>) {
		if p.locked {
			return;
		}
		let vel = p.velocity();
		let speed_sq = vel.magnitude_squared();
		if speed_sq == 0. {
			return;
		}
		p.add_force(v2::normalize_to(vel, -self.coefficient * speed_sq));
	}
}
