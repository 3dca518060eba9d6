use crate::engine::{SimConstants, Spring, Vec3};

/// Force exerted by `spring` on its `p0` particle; `p1` receives the negation.
///
/// Returns `None` when the endpoints coincide, since the spring axis is
/// undefined there.
pub fn spring_force(
    spring: &Spring,
    positions: &[Vec3],
    velocities: &[Vec3],
    stiffness: f32,
    damping: f32,
) -> Option<Vec3> {
    let delta = positions[spring.p1] - positions[spring.p0];
    let l = delta.length();
    if l == 0.0 {
        return None;
    }
    let dir = delta / l;

    let spring_mag = stiffness * (l - spring.rest);
    // Only the relative velocity along the axis is damped
    let damping_mag = damping * (velocities[spring.p1] - velocities[spring.p0]).dot(dir);

    Some(dir * (spring_mag + damping_mag))
}

/// Total force on every particle: gravity plus all incident springs.
///
/// Indices are assumed to be in range; `stepper::validate` checks them.
pub fn accumulate_forces(
    positions: &[Vec3],
    velocities: &[Vec3],
    springs: &[Spring],
    constants: &SimConstants,
) -> Vec<Vec3> {
    let weight = constants.gravity * constants.mass;
    let mut forces = vec![weight; positions.len()];

    for (i, spring) in springs.iter().enumerate() {
        match spring_force(
            spring,
            positions,
            velocities,
            constants.stiffness,
            constants.damping,
        ) {
            Some(f) => {
                forces[spring.p0] += f;
                forces[spring.p1] -= f;
            }
            None => {
                tracing::trace!(
                    spring = i,
                    p0 = spring.p0,
                    p1 = spring.p1,
                    "skipping zero-length spring"
                );
            }
        }
    }

    forces
}
