//! Boundary collision response
//!
//! Particles leaving an axis-aligned box are reflected back inside. The
//! overshoot past a wall is mirrored and scaled by the restitution rather
//! than clamped, and the velocity component normal to that wall is reversed
//! and scaled by the same factor. Each axis is handled on its own, so a
//! particle leaving through a corner is corrected once per crossed wall.

use crate::engine::Vec3;

/// Axis-aligned simulation domain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, pos: Vec3) -> bool {
        pos.cmpge(self.min).all() && pos.cmple(self.max).all()
    }
}

impl Default for Bounds {
    /// The unit cube `[-1, 1]^3`
    fn default() -> Self {
        Self {
            min: Vec3::NEG_ONE,
            max: Vec3::ONE,
        }
    }
}

/// Reflect a single coordinate off `[lo, hi]`. Returns true if it was outside.
fn reflect_axis(pos: &mut f32, vel: &mut f32, lo: f32, hi: f32, restitution: f32) -> bool {
    if *pos > hi {
        *vel = -*vel * restitution;
        *pos = hi - restitution * (*pos - hi);
        true
    } else if *pos < lo {
        *vel = -*vel * restitution;
        *pos = lo + restitution * (lo - *pos);
        true
    } else {
        false
    }
}

/// Apply boundary response to every particle, returning the number of
/// per-axis corrections made.
pub fn resolve_boundaries(
    positions: &mut [Vec3],
    velocities: &mut [Vec3],
    bounds: &Bounds,
    restitution: f32,
) -> usize {
    let mut hits = 0;

    for (pos, vel) in positions.iter_mut().zip(velocities.iter_mut()) {
        for axis in 0..3 {
            if reflect_axis(
                &mut pos[axis],
                &mut vel[axis],
                bounds.min[axis],
                bounds.max[axis],
                restitution,
            ) {
                hits += 1;
            }
        }
    }

    hits
}
