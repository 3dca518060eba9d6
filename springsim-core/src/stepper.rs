use crate::collision::{resolve_boundaries, Bounds};
use crate::engine::{SimConstants, Spring, Vec3};
use crate::error::StepError;
use crate::forces::accumulate_forces;
use crate::integrator::integrate;

/// Check constants and topology without touching any state
pub fn validate(
    dt: f32,
    positions: &[Vec3],
    velocities: &[Vec3],
    springs: &[Spring],
    constants: &SimConstants,
) -> Result<(), StepError> {
    if !dt.is_finite() || dt < 0.0 {
        return Err(StepError::InvalidTimeStep(dt));
    }
    validate_constants(constants)?;
    if positions.len() != velocities.len() {
        return Err(StepError::LengthMismatch {
            positions: positions.len(),
            velocities: velocities.len(),
        });
    }
    validate_springs(springs, positions.len())
}

pub fn validate_constants(constants: &SimConstants) -> Result<(), StepError> {
    if !constants.mass.is_finite() || constants.mass <= 0.0 {
        return Err(StepError::InvalidMass(constants.mass));
    }
    if !constants.stiffness.is_finite() || constants.stiffness < 0.0 {
        return Err(StepError::NegativeStiffness(constants.stiffness));
    }
    if !constants.damping.is_finite() || constants.damping < 0.0 {
        return Err(StepError::NegativeDamping(constants.damping));
    }
    Ok(())
}

pub fn validate_springs(springs: &[Spring], count: usize) -> Result<(), StepError> {
    for (i, spring) in springs.iter().enumerate() {
        for index in [spring.p0, spring.p1] {
            if index >= count {
                return Err(StepError::SpringIndexOutOfBounds {
                    spring: i,
                    index,
                    count,
                });
            }
        }
        if !spring.rest.is_finite() || spring.rest < 0.0 {
            return Err(StepError::NegativeRestLength {
                spring: i,
                rest: spring.rest,
            });
        }
    }
    Ok(())
}

/// Advance the particle system by one time step, in place.
///
/// Forces from gravity and every spring are summed first, then velocities
/// and positions are integrated, then particles outside `[-1, 1]^3` are
/// reflected back in. On error nothing has been modified.
pub fn step(
    dt: f32,
    positions: &mut [Vec3],
    velocities: &mut [Vec3],
    springs: &[Spring],
    constants: &SimConstants,
) -> Result<(), StepError> {
    validate(dt, positions, velocities, springs, constants)?;

    let forces = accumulate_forces(positions, velocities, springs, constants);
    integrate(positions, velocities, &forces, constants.mass, dt);
    let hits = resolve_boundaries(positions, velocities, &Bounds::default(), constants.restitution);

    tracing::debug!(
        particles = positions.len(),
        springs = springs.len(),
        boundary_hits = hits,
        dt,
        "stepped"
    );

    Ok(())
}
