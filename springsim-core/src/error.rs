use thiserror::Error;

/// Malformed input rejected before a step mutates any state
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StepError {
    #[error("positions and velocities differ in length ({positions} vs {velocities})")]
    LengthMismatch { positions: usize, velocities: usize },

    #[error("spring {spring} references particle {index}, but there are only {count} particles")]
    SpringIndexOutOfBounds {
        spring: usize,
        index: usize,
        count: usize,
    },

    #[error("spring {spring} has invalid rest length {rest}")]
    NegativeRestLength { spring: usize, rest: f32 },

    #[error("particle mass must be positive and finite, got {0}")]
    InvalidMass(f32),

    #[error("time step must be non-negative and finite, got {0}")]
    InvalidTimeStep(f32),

    #[error("stiffness must be non-negative and finite, got {0}")]
    NegativeStiffness(f32),

    #[error("damping must be non-negative and finite, got {0}")]
    NegativeDamping(f32),
}
