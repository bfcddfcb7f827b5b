use fnv::FnvHashMap;
use slotmap::SlotMap;

use crate::behavior::{Behavior, BodySnapshot, Drag, Gravity, WorldView};
use crate::bounds::Bounds;
use crate::constraint::Constraint;
use crate::error::PhysicsError;
use crate::handle::{BehaviorId, OrderedSet, ParticleId, SpringId};
use crate::particle::Particle;
use crate::spring::Spring;
use crate::V2;
use protocol::pr_model::{PrModel, PrParticle, PrSpring};

/// Iteration always follows insertion order, so results are
/// deterministic for a given setup.
pub struct Engine {
	particles: SlotMap<ParticleId, Particle>,
	particle_order: OrderedSet<ParticleId>,
	springs: SlotMap<SpringId, Spring>,
	spring_order: OrderedSet<SpringId>,
	behaviors: SlotMap<BehaviorId, Box<dyn Behavior>>,
	behavior_order: OrderedSet<BehaviorId>,
	bounds: Option<Bounds>,
	iters: usize,
	time_scale: f32,
	time_scale_pinned: bool,
	snapshot: Vec<BodySnapshot>,
	snapshot_index: FnvHashMap<ParticleId, usize>,
}

impl Default for Engine {
	fn default() -> Self {
		let iters = 50;
		Self {
			particles: SlotMap::with_key(),
			particle_order: OrderedSet::default(),
			springs: SlotMap::with_key(),
			spring_order: OrderedSet::default(),
			behaviors: SlotMap::with_key(),
			behavior_order: OrderedSet::default(),
			bounds: None,
			iters,
			time_scale: 1. / iters as f32,
			time_scale_pinned: false,
			snapshot: Vec::new(),
			snapshot_index: FnvHashMap::default(),
		}
	}
}

impl Engine {
	/// Unless pinned via `with_time_scale`, the force scale follows as
	/// `1 / iters`.
	pub fn with_iters(mut self, iters: usize) -> Self {
		self.iters = iters.max(1);
		if !self.time_scale_pinned {
			self.time_scale = 1. / self.iters as f32;
		}
		self
	}

	pub fn with_time_scale(mut self, time_scale: f32) -> Self {
		self.time_scale = time_scale;
		self.time_scale_pinned = true;
		self
	}

	pub fn with_bounds(mut self, bounds: Bounds) -> Self {
		self.bounds = Some(bounds);
		self
	}

	pub fn default_setup(&mut self) {
		self.add_behavior(Drag::new(0.02));
		self.add_behavior(Gravity::new(V2::new(0., -0.1)));
	}

	pub fn iters(&self) -> usize {
		self.iters
	}

	pub fn time_scale(&self) -> f32 {
		self.time_scale
	}

	pub fn bounds(&self) -> Option<Bounds> {
		self.bounds
	}

	pub fn set_bounds(&mut self, bounds: Bounds) {
		self.bounds = Some(bounds);
	}

	pub fn clear_bounds(&mut self) {
		self.bounds = None;
	}

	pub fn add_particle(&mut self, particle: Particle) -> ParticleId {
		let id = self.particles.insert(particle);
		self.particle_order.insert(id);
		id
	}

	/// Also removes every spring attached to the particle.
	pub fn remove_particle(&mut self, id: ParticleId) -> bool {
		if !self.particles.contains_key(id) {
			return false;
		}
		let attached: Vec<SpringId> = self.particles[id].springs.clone();
		for spring_id in attached {
			self.remove_spring(spring_id);
		}
		self.particles.remove(id);
		self.particle_order.remove(id);
		true
	}

	/// A missing rest length defaults to the current endpoint distance.
	pub fn add_spring(&mut self, mut spring: Spring) -> Result<SpringId, PhysicsError> {
		let (a, b) = (spring.a(), spring.b());
		if !self.particles.contains_key(a) || !self.particles.contains_key(b) {
			return Err(PhysicsError::UnknownParticle);
		}
		if let Some(l) = spring.rest_length() {
			if l < 0. {
				return Err(PhysicsError::NegativeRestLength(l));
			}
		}
		let distance = (self.particles[a].pos - self.particles[b].pos).magnitude();
		spring.resolve_rest_length(distance);
		let id = self.springs.insert(spring);
		self.spring_order.insert(id);
		if !self.particles[a].springs.contains(&id) {
			self.particles[a].springs.push(id);
		}
		if !self.particles[b].springs.contains(&id) {
			self.particles[b].springs.push(id);
		}
		Ok(id)
	}

	pub fn remove_spring(&mut self, id: SpringId) -> bool {
		let spring = match self.springs.remove(id) {
			Some(spring) => spring,
			None => return false,
		};
		self.spring_order.remove(id);
		for pid in [spring.a(), spring.b()] {
			if let Some(p) = self.particles.get_mut(pid) {
				p.springs.retain(|sid| *sid != id);
			}
		}
		true
	}

	pub fn add_behavior(&mut self, behavior: impl Behavior + 'static) -> BehaviorId {
		let id = self.behaviors.insert(Box::new(behavior));
		self.behavior_order.insert(id);
		id
	}

	pub fn remove_behavior(&mut self, id: BehaviorId) -> bool {
		if self.behaviors.remove(id).is_none() {
			return false;
		}
		self.behavior_order.remove(id);
		true
	}

	pub fn add_constraint_to_all(&mut self, constraint: &(dyn Constraint + 'static)) {
		for id in self.particle_order.iter() {
			if let Some(p) = self.particles.get_mut(id) {
				p.constraints.push(dyn_clone::clone_box(constraint));
			}
		}
	}

	pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
		self.particles.get(id)
	}

	pub fn particle_mut(&mut self, id: ParticleId) -> Option<&mut Particle> {
		self.particles.get_mut(id)
	}

	pub fn spring(&self, id: SpringId) -> Option<&Spring> {
		self.springs.get(id)
	}

	pub fn spring_mut(&mut self, id: SpringId) -> Option<&mut Spring> {
		self.springs.get_mut(id)
	}

	pub fn particles(&self) -> impl Iterator<Item = (ParticleId, &Particle)> {
		self.particle_order
			.iter()
			.filter_map(|id| self.particles.get(id).map(|p| (id, p)))
	}

	pub fn springs(&self) -> impl Iterator<Item = (SpringId, &Spring)> {
		self.spring_order
			.iter()
			.filter_map(|id| self.springs.get(id).map(|s| (id, s)))
	}

	pub fn particle_count(&self) -> usize {
		self.particle_order.len()
	}

	pub fn spring_count(&self) -> usize {
		self.spring_order.len()
	}

	pub fn behavior_count(&self) -> usize {
		self.behavior_order.len()
	}

	pub fn contains_particle(&self, id: ParticleId) -> bool {
		self.particles.contains_key(id)
	}

	// behaviors and configuration stay
	pub fn clear(&mut self) {
		self.particles.clear();
		self.particle_order.clear();
		self.springs.clear();
		self.spring_order.clear();
	}

	pub fn update(&mut self) {
		self.apply_behaviors();
		self.integrate();
		self.relax_springs();
		self.constrain_to_bounds();
	}

	fn take_snapshot(&mut self) {
		self.snapshot.clear();
		self.snapshot_index.clear();
		for id in self.particle_order.iter() {
			if let Some(p) = self.particles.get(id) {
				self.snapshot_index.insert(id, self.snapshot.len());
				self.snapshot.push(BodySnapshot {
					id,
					pos: p.pos,
					mass: p.mass(),
				});
			}
		}
	}

	fn apply_behaviors(&mut self) {
		self.take_snapshot();
		let view = WorldView::new(&self.snapshot, &self.snapshot_index);
		for behavior_id in self.behavior_order.iter() {
			let behavior = match self.behaviors.get_mut(behavior_id) {
				Some(behavior) => behavior,
				None => continue,
			};
			for id in self.particle_order.iter() {
				if let Some(p) = self.particles.get_mut(id) {
					behavior.apply(id, p, &view);
				}
			}
		}
		// Per-particle behaviors run after the global set.
		for id in self.particle_order.iter() {
			if let Some(p) = self.particles.get_mut(id) {
				if p.behaviors.is_empty() {
					continue;
				}
				let mut local = std::mem::take(&mut p.behaviors);
				for behavior in local.iter_mut() {
					behavior.apply(id, p, &view);
				}
				p.behaviors = local;
			}
		}
	}

	fn integrate(&mut self) {
		let time_scale = self.time_scale;
		for id in self.particle_order.iter() {
			if let Some(p) = self.particles.get_mut(id) {
				p.force *= time_scale;
				p.update();
				p.apply_constraints();
			}
		}
	}

	fn relax_springs(&mut self) {
		for i in 0..self.iters {
			let final_pass = i + 1 == self.iters;
			for spring_id in self.spring_order.iter() {
				let spring = match self.springs.get(spring_id) {
					Some(spring) => spring,
					None => continue,
				};
				let keys = [spring.a(), spring.b()];
				if let Some([pa, pb]) = self.particles.get_disjoint_mut(keys) {
					spring.relax(pa, pb, final_pass);
				}
			}
		}
	}

	fn constrain_to_bounds(&mut self) {
		let bounds = match self.bounds {
			Some(bounds) => bounds,
			None => return,
		};
		for id in self.particle_order.iter() {
			if let Some(p) = self.particles.get_mut(id) {
				let inset = bounds.shrink(p.radius);
				let mut vel = p.velocity();
				let hit = inset.clamp(&mut p.pos);
				if !hit[0] && !hit[1] {
					continue;
				}
				if hit[0] {
					vel[0] = 0.;
				}
				if hit[1] {
					vel[1] = 0.;
				}
				p.set_velocity(vel);
			}
		}
	}

	pub fn pr_model(&self) -> PrModel {
		let particles = self
			.particles()
			.map(|(_, p)| PrParticle {
				pos: p.pos.into(),
				radius: p.radius,
			})
			.collect();
		let springs = self
			.springs()
			.filter_map(|(_, s)| {
				let pa = self.particles.get(s.a())?;
				let pb = self.particles.get(s.b())?;
				Some(PrSpring {
					ends: [pa.pos.into(), pb.pos.into()],
					rest_length: s.rest_length().unwrap_or(0.),
				})
			})
			.collect();
		PrModel { particles, springs }
	}
}
