use crate::behavior::{Behavior, WorldView};
use crate::handle::ParticleId;
use crate::particle::Particle;
use crate::V2;

#[derive(Clone, Debug)]
pub struct ConstantForce {
	force: V2,
}

impl ConstantForce {
	pub fn new(force: V2) -> Self {
		Self { force }
	}
}

impl Behavior for ConstantForce {
	fn apply(&mut self, _id: ParticleId, p: &mut Particle, _view: &WorldView<'_>) {
		if p.locked {
			return;
		}
		p.add_force(self.force);
	}
}
