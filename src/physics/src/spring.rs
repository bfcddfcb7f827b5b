use rand::Rng;

use crate::handle::ParticleId;
use crate::particle::Particle;
use crate::v2::{self, EPSILON};
use crate::V2;

/// Distance relationship between two particles, resolved by
/// inverse-mass-weighted positional correction. Does not own its
/// endpoints; the engine wires it into both particles' spring lists
/// and must unwire it on removal.
#[derive(Clone)]
pub struct Spring {
	a: ParticleId,
	b: ParticleId,
	rest_length: Option<f32>,
	k: f32,
	damping: f32,
}

impl Spring {
	pub fn new(a: ParticleId, b: ParticleId, k: f32) -> Self {
		Self {
			a,
			b,
			rest_length: None,
			k,
			damping: 0.05,
		}
	}

	/// Explicit rest length; defaults to the A-B distance at
	/// registration time.
	pub fn with_rest_length(mut self, rest_length: f32) -> Self {
		self.rest_length = Some(rest_length);
		self
	}

	pub fn with_damping(mut self, damping: f32) -> Self {
		self.damping = damping;
		self
	}

	pub fn a(&self) -> ParticleId {
		self.a
	}

	pub fn b(&self) -> ParticleId {
		self.b
	}

	pub fn k(&self) -> f32 {
		self.k
	}

	pub fn damping(&self) -> f32 {
		self.damping
	}

	pub fn rest_length(&self) -> Option<f32> {
		self.rest_length
	}

	pub(crate) fn resolve_rest_length(&mut self, current: f32) {
		if self.rest_length.is_none() {
			self.rest_length = Some(current);
		}
	}

	/// One relaxation pass. Locked endpoints absorb no correction; on
	/// the final pass of a step each endpoint re-applies its attached
	/// constraints.
	pub(crate) fn relax(&self, pa: &mut Particle, pb: &mut Particle, final_pass: bool) {
		let rest_length = match self.rest_length {
			Some(l) => l,
			None => return,
		};
		let dp = pb.pos - pa.pos;
		let l = dp.magnitude();
		if !l.is_normal() {
			if rest_length > EPSILON {
				eprintln!("WARN: bad spring length {}", l);
				pa.pos += nudge();
				pb.pos += nudge();
			}
			return;
		}
		let wa = if pa.locked { 0. } else { pa.imass() };
		let wb = if pb.locked { 0. } else { pb.imass() };
		let w = wa + wb;
		if w != 0. {
			let extension = l - rest_length;
			if extension.abs() > EPSILON {
				let correct = v2::normalize_or_zero(dp) * (self.k * extension / w);
				pa.pos += correct * wa;
				pb.pos -= correct * wb;
			}
		}
		if final_pass {
			pa.apply_constraints();
			pb.apply_constraints();
		}
	}
}

// Coincident endpoints have no direction to correct along; kick them
// apart so the next pass can resolve the distance.
fn nudge() -> V2 {
	let mut rng = rand::thread_rng();
	V2::new(rng.gen_range(-1e-3..1e-3), rng.gen_range(-1e-3..1e-3))
}
