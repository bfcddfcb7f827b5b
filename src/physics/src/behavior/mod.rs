pub mod attract;
pub mod bounce;
pub mod constant_force;
pub mod drag;
pub mod dynamic_force;
pub mod friction;
pub mod gravitation;
pub mod gravity;
pub mod jitter;

pub use attract::Attract;
pub use bounce::Bounce;
pub use constant_force::ConstantForce;
pub use drag::Drag;
pub use dynamic_force::DynamicForce;
pub use friction::Friction;
pub use gravitation::Gravitation;
pub use gravity::Gravity;
pub use jitter::Jitter;

use dyn_clone::DynClone;
use fnv::FnvHashMap;

use crate::handle::ParticleId;
use crate::particle::Particle;
use crate::V2;

#[derive(Clone, Copy, Debug)]
pub struct BodySnapshot {
	pub id: ParticleId,
	pub pos: V2,
	pub mass: f32,
}

/// Read-only view of the particle population, taken before the force
/// phase. Lets particle-set behaviors read neighbours while the
/// subject particle is borrowed mutably.
pub struct WorldView<'a> {
	bodies: &'a [BodySnapshot],
	index: &'a FnvHashMap<ParticleId, usize>,
}

impl<'a> WorldView<'a> {
	pub fn new(
		bodies: &'a [BodySnapshot],
		index: &'a FnvHashMap<ParticleId, usize>,
	) -> Self {
		Self { bodies, index }
	}

	pub fn bodies(&self) -> &[BodySnapshot] {
		self.bodies
	}

	pub fn body_of(&self, id: ParticleId) -> Option<&BodySnapshot> {
		self.index.get(&id).map(|i| &self.bodies[*i])
	}

	pub fn position_of(&self, id: ParticleId) -> Option<V2> {
		self.body_of(id).map(|b| b.pos)
	}
}

/// Strategy that injects force into one particle each step. Must not
/// touch any particle other than the one passed in.
pub trait Behavior: DynClone {
	fn apply(&mut self, id: ParticleId, p: &mut Particle, view: &WorldView<'_>);
}

dyn_clone::clone_trait_object!(Behavior);
