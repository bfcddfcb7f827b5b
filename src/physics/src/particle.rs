use crate::behavior::Behavior;
use crate::constraint::Constraint;
use crate::handle::SpringId;
use crate::V2;

pub type PositionFn = Box<dyn FnMut() -> V2>;

/// A point mass integrated Verlet-style: velocity is implicit,
/// always `pos - ppos`.
pub struct Particle {
	pub pos: V2,
	pub ppos: V2,
	pub force: V2,
	pub radius: f32,
	pub locked: bool,
	mass: f32,
	imass: f32,
	position_callback: Option<PositionFn>,
	pub(crate) springs: Vec<SpringId>,
	pub(crate) behaviors: Vec<Box<dyn Behavior>>,
	pub(crate) constraints: Vec<Box<dyn Constraint>>,
}

impl Particle {
	pub fn new(pos: V2) -> Self {
		Self {
			pos,
			ppos: pos,
			force: V2::zeros(),
			radius: 10.,
			locked: false,
			mass: 1.,
			imass: 1.,
			position_callback: None,
			springs: Vec::new(),
			behaviors: Vec::new(),
			constraints: Vec::new(),
		}
	}

	pub fn with_mass(mut self, mass: f32) -> Self {
		self.set_mass(mass);
		self
	}

	pub fn with_radius(mut self, radius: f32) -> Self {
		self.radius = radius;
		self
	}

	pub fn with_locked(mut self) -> Self {
		self.locked = true;
		self
	}

	pub fn mass(&self) -> f32 {
		self.mass
	}

	// 0 encodes an immovable particle
	pub fn imass(&self) -> f32 {
		self.imass
	}

	pub fn set_mass(&mut self, mass: f32) {
		self.mass = mass;
		self.imass = if mass == 0. { 0. } else { 1. / mass };
	}

	pub fn add_force(&mut self, force: V2) {
		self.force += force;
	}

	pub fn clear_force(&mut self) {
		self.force = V2::zeros();
	}

	pub fn velocity(&self) -> V2 {
		self.pos - self.ppos
	}

	pub fn set_velocity(&mut self, vel: V2) {
		self.ppos = self.pos - vel;
	}

	pub fn add_velocity(&mut self, dv: V2) {
		self.ppos -= dv;
	}

	pub fn clear_velocity(&mut self) {
		self.ppos = self.pos;
	}

	pub fn dampen(&mut self, gamma: f32) {
		let vel = self.velocity() * (1. - gamma);
		self.set_velocity(vel);
	}

	pub fn lock(&mut self) {
		self.locked = true;
	}

	/// Lock and drive the position from an external source each step.
	pub fn lock_to(&mut self, callback: impl FnMut() -> V2 + 'static) {
		self.locked = true;
		self.position_callback = Some(Box::new(callback));
	}

	pub fn unlock(&mut self) {
		self.clear_velocity();
		self.locked = false;
	}

	pub fn springs(&self) -> &[SpringId] {
		&self.springs
	}

	pub fn add_behavior(&mut self, behavior: impl Behavior + 'static) {
		self.behaviors.push(Box::new(behavior));
	}

	pub fn clear_behaviors(&mut self) {
		self.behaviors.clear();
	}

	pub fn add_constraint(&mut self, constraint: impl Constraint + 'static) {
		self.constraints.push(Box::new(constraint));
	}

	pub fn clear_constraints(&mut self) {
		self.constraints.clear();
	}

	// Locked particles are exempt: nothing may move them except their
	// position callback.
	pub(crate) fn apply_constraints(&mut self) {
		if self.locked || self.constraints.is_empty() {
			return;
		}
		let constraints = std::mem::take(&mut self.constraints);
		for constraint in &constraints {
			constraint.apply(self);
		}
		self.constraints = constraints;
	}

	/// Verlet step. The accumulated force is multiplied by mass, not
	/// divided; behaviors that want uniform acceleration compensate by
	/// scaling with the inverse mass (see `Gravity`).
	pub fn update(&mut self) {
		if self.locked {
			if let Some(callback) = self.position_callback.as_mut() {
				self.pos = callback();
			}
			return;
		}
		let temp = self.pos;
		let vel = self.pos - self.ppos;
		self.pos += vel + self.force * self.mass;
		self.ppos = temp;
		self.clear_force();
	}
}
