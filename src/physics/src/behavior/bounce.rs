use crate::behavior::{Behavior, WorldView};
use crate::bounds::Bounds;
use crate::handle::ParticleId;
use crate::particle::Particle;

#[derive(Clone, Debug)]
pub struct Bounce {
	bounds: Bounds,
	restitution: f32,
}

impl Bounce {
	pub fn new(bounds: Bounds) -> Self {
		Self {
			bounds,
			restitution: 1.,
		}
	}

	pub fn with_restitution(mut self, restitution: f32) -> Self {
		self.restitution = restitution;
		self
	}
}

impl Behavior for Bounce {
	fn apply(&mut self, _id: ParticleId, p: &mut Particle, _view: &WorldView<'_>) {
		if p.locked {
			return;
		}
		let inset = self.bounds.shrink(p.radius);
		let mut vel = p.velocity();
		let hit = inset.clamp(&mut p.pos);
		if !hit[0] && !hit[1] {
			return;
		}
		if hit[0] {
			vel[0] = -vel[0] * self.restitution;
		}
		if hit[1] {
			vel[1] = -vel[1] * self.restitution;
		}
		p.set_velocity(vel);
	}
}
