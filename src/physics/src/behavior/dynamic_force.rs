use std::sync::Arc;

use crate::behavior::{Behavior, WorldView};
use crate::handle::ParticleId;
use crate::particle::Particle;
use crate::V2;

#[derive(Clone)]
pub struct DynamicForce {
	force_fn: Arc<dyn Fn(&Particle) -> V2>,
}

impl DynamicForce {
	pub fn new(force_fn: impl Fn(&Particle) -> V2 + 'static) -> Self {
		Self {
			force_fn: Arc::new(force_fn),
		}
	}
}

impl Behavior for DynamicForce {
	fn apply(&mut self, _id: ParticleId, p: &mut Particle, _view: &WorldView<'_>) {
		let force = (self.force_fn)(p);
		p.add_force(force);
	}
}
