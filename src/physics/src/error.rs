use std::fmt;

/// Configuration errors, raised at construction time only.
/// The step pipeline itself never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
	NegativeRestLength(f32),
	NegativeLength(f32),
	ZeroSegments,
	UnknownParticle,
}

impl fmt::Display for PhysicsError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PhysicsError::NegativeRestLength(l) => {
				write!(f, "spring rest length must be >= 0, got {}", l)
			}
			PhysicsError::NegativeLength(l) => {
				write!(f, "chain length must be >= 0, got {}", l)
			}
			PhysicsError::ZeroSegments => {
				write!(f, "chain segment count must be > 0")
			}
			PhysicsError::UnknownParticle => {
				write!(f, "particle is not registered in the engine")
			}
		}
	}
}

impl std::error::Error for PhysicsError {}
