use crate::engine::Engine;
use crate::handle::ParticleId;
use crate::particle::Particle;
use crate::V2;

/// Removes particles that come within a radius of a point. O(n) over
/// the particle population per call; surviving particles keep their
/// relative order.
#[derive(Clone, Copy, Debug)]
pub struct ParticleSink {
	pos: V2,
	radius: f32,
}

impl ParticleSink {
	pub fn new(pos: V2, radius: f32) -> Self {
		Self { pos, radius }
	}

	pub fn set_position(&mut self, pos: V2) {
		self.pos = pos;
	}

	pub fn set_radius(&mut self, radius: f32) {
		self.radius = radius;
	}

	pub fn contains(&self, p: &Particle) -> bool {
		(p.pos - self.pos).magnitude_squared() <= self.radius * self.radius
	}

	pub fn absorb(&self, engine: &mut Engine) -> usize {
		let doomed: Vec<ParticleId> = engine
			.particles()
			.filter(|(_, p)| self.contains(p))
			.map(|(id, _)| id)
			.collect();
		for id in &doomed {
			engine.remove_particle(*id);
		}
		doomed.len()
	}
}
