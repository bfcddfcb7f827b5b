use crate::engine::Engine;
use crate::handle::ParticleId;
use crate::particle::Particle;
use crate::V2;

pub type ParticleFactory = Box<dyn FnMut(V2) -> Particle>;

/// Spawns particles at a fixed average rate. The fractional part of
/// `rate * dt` carries over between calls, so the long-run rate is
/// independent of call frequency.
pub struct ParticleEmitter {
	pos: V2,
	rate: f32,
	factory: ParticleFactory,
	accumulator: f32,
	emitting: bool,
}

impl ParticleEmitter {
	pub fn new(pos: V2, rate: f32, factory: impl FnMut(V2) -> Particle + 'static) -> Self {
		Self {
			pos,
			rate,
			factory: Box::new(factory),
			accumulator: 0.,
			emitting: true,
		}
	}

	pub fn set_position(&mut self, pos: V2) {
		self.pos = pos;
	}

	pub fn set_rate(&mut self, rate: f32) {
		self.rate = rate;
	}

	pub fn set_emitting(&mut self, emitting: bool) {
		self.emitting = emitting;
	}

	pub fn is_emitting(&self) -> bool {
		self.emitting
	}

	/// Fractional carry, always in `[0, 1)` after an update.
	pub fn accumulator(&self) -> f32 {
		self.accumulator
	}

	pub fn emit(&mut self) -> Particle {
		(self.factory)(self.pos)
	}

	/// Advances the accumulator by `rate * dt` and spawns one particle
	/// into the engine per whole unit.
	pub fn update(&mut self, engine: &mut Engine, dt: f32) -> Vec<ParticleId> {
		let mut spawned = Vec::new();
		if !self.emitting {
			return spawned;
		}
		self.accumulator += self.rate * dt;
		while self.accumulator >= 1. {
			let particle = self.emit();
			spawned.push(engine.add_particle(particle));
			self.accumulator -= 1.;
		}
		spawned
	}
}
