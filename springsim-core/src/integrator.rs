use crate::engine::Vec3;

/// Advance every particle by dt using semi-implicit Euler integration
/// (v += a*dt, then x += v*dt with the updated velocity)
pub fn integrate(
    positions: &mut [Vec3],
    velocities: &mut [Vec3],
    forces: &[Vec3],
    mass: f32,
    dt: f32,
) {
    for ((pos, vel), force) in positions.iter_mut().zip(velocities.iter_mut()).zip(forces) {
        let accel = *force / mass;
        *vel += accel * dt;
        *pos += *vel * dt;
    }
}
