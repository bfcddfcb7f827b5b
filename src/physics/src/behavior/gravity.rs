use crate::behavior::{Behavior, WorldView};
use crate::handle::ParticleId;
use crate::particle::Particle;
use crate::V2;

/// Uniform acceleration. The integration step multiplies the
/// accumulated force by mass, so the acceleration is scaled by the
/// inverse mass here and the two cancel for any mass. Locked particles
/// are not skipped; the lock itself prevents motion.
#[derive(Clone, Debug)]
pub struct Gravity {
	acc: V2,
}

impl Gravity {
	pub fn new(acc: V2) -> Self {
		Self { acc }
	}
}

impl Behavior for Gravity {
	fn apply(&mut self, _id: ParticleId, p: &mut Particle, _view: &WorldView<'_>) {
		p.add_force(self.acc * p.imass());
	}
}
