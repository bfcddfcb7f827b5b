use crate::behavior::{Behavior, WorldView};
use crate::handle::ParticleId;
use crate::particle::Particle;
use crate::v2;

#[derive(Clone, Debug)]
pub struct Friction {
	static_coefficient: f32,
	kinetic_coefficient: f32,
}

impl Friction {
	pub fn new(static_coefficient: f32, kinetic_coefficient: f32) -> Self {
		Self {
			static_coefficient,
			kinetic_coefficient,
		}
	}
}

impl Behavior for Friction {
	fn apply(&mut self, _id: ParticleId, p: &mut Particle, _view: &WorldView<'_>) {
		if p.locked {
			return;
		}
		let vel = p.velocity();
		let speed = vel.magnitude();
		if speed == 0. {
			return;
		}
		if speed < self.static_coefficient {
			p.clear_velocity();
			return;
		}
		p.add_force(v2::normalize_to(vel, -self.kinetic_coefficient));
	}
}
