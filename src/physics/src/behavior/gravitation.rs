use crate::behavior::{Behavior, WorldView};
use crate::handle::ParticleId;
use crate::particle::Particle;
use crate::v2::{self, EPSILON};

/// Pairwise Newtonian gravitation against the particle set, read from
/// the per-step snapshot. O(n) per particle per call, O(n^2) for a
/// full engine pass; by far the most expensive built-in.
#[derive(Clone, Debug)]
pub struct Gravitation {
	g: f32,
	sources: Option<Vec<ParticleId>>,
}

impl Gravitation {
	pub fn new(g: f32) -> Self {
		Self { g, sources: None }
	}

	/// Restrict the attracting set; the default is every registered
	/// particle.
	pub fn with_sources(mut self, sources: Vec<ParticleId>) -> Self {
		self.sources = Some(sources);
		self
	}

	fn pull(&self, p: &mut Particle, other_pos: crate::V2, other_mass: f32) {
		let dir = other_pos - p.pos;
		let dist_sq = dir.magnitude_squared().max(EPSILON);
		let magnitude = self.g * p.mass() * other_mass / dist_sq;
		p.add_force(v2::normalize_to(dir, magnitude));
	}
}

impl Behavior for Gravitation {
	fn apply(&mut self, id: ParticleId, p: &mut Particle, view: &WorldView<'_>) {
		if p.locked {
			return;
		}
		match &self.sources {
			None => {
				for other in view.bodies() {
					if other.id == id {
						continue;
					}
					self.pull(p, other.pos, other.mass);
				}
			}
			Some(sources) => {
				for source in sources {
					if *source == id {
						continue;
					}
					if let Some(other) = view.body_of(*source) {
						self.pull(p, other.pos, other.mass);
					}
				}
			}
		}
	}
}
