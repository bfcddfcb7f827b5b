use crate::engine::Engine;
use crate::error::PhysicsError;
use crate::handle::{ParticleId, SpringId};
use crate::particle::Particle;
use crate::spring::Spring;
use crate::v2;
use crate::V2;

/// Per-segment stiffness, or a total for the whole chain. A total
/// strength K over N segments gives each spring `K * N`, so the
/// aggregate restoring behavior is independent of the subdivision.
#[derive(Clone, Copy, Debug)]
pub enum ChainStrength {
	PerSegment(f32),
	Total(f32),
}

#[derive(Debug)]
pub struct SpringChain {
	particles: Vec<ParticleId>,
	springs: Vec<SpringId>,
}

impl SpringChain {
	/// Extends `segments` particles from `start` along `dir`, spaced
	/// `length / segments` apart, with one spring per gap.
	pub fn build(
		engine: &mut Engine,
		start: ParticleId,
		dir: V2,
		length: f32,
		segments: usize,
		strength: ChainStrength,
	) -> Result<Self, PhysicsError> {
		if segments == 0 {
			return Err(PhysicsError::ZeroSegments);
		}
		if length < 0. {
			return Err(PhysicsError::NegativeLength(length));
		}
		let mut pos = match engine.particle(start) {
			Some(p) => p.pos,
			None => return Err(PhysicsError::UnknownParticle),
		};
		let segment_length = length / segments as f32;
		let step = v2::normalize_to(dir, segment_length);
		let k = match strength {
			ChainStrength::PerSegment(k) => k,
			ChainStrength::Total(k) => k * segments as f32,
		};

		let mut particles = vec![start];
		for _ in 0..segments {
			pos += step;
			particles.push(engine.add_particle(Particle::new(pos)));
		}
		let mut springs = Vec::with_capacity(segments);
		for pair in particles.windows(2) {
			let spring =
				Spring::new(pair[0], pair[1], k).with_rest_length(segment_length);
			springs.push(engine.add_spring(spring)?);
		}
		Ok(Self { particles, springs })
	}

	pub fn particles(&self) -> &[ParticleId] {
		&self.particles
	}

	pub fn springs(&self) -> &[SpringId] {
		&self.springs
	}

	pub fn head(&self) -> ParticleId {
		self.particles[0]
	}

	pub fn tail(&self) -> ParticleId {
		self.particles[self.particles.len() - 1]
	}
}
