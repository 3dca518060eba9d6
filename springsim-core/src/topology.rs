//! Builders for spring networks
//!
//! A mesh becomes a mass-spring system by placing one particle at every
//! vertex and one spring along every unique edge, with the rest length taken
//! from the initial pose.

use crate::engine::{Spring, Vec3};
use crate::error::StepError;
use std::collections::HashSet;

/// Rectangular cloth patch in the XY plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub cols: usize,
    pub rows: usize,
    pub spacing: f32,
    pub origin: Vec3,
    /// Add springs along both diagonals of every cell
    pub shear: bool,
}

/// Spring whose rest length is the current distance between `p0` and `p1`
pub fn spring_between(positions: &[Vec3], p0: usize, p1: usize) -> Result<Spring, StepError> {
    let count = positions.len();
    for index in [p0, p1] {
        if index >= count {
            return Err(StepError::SpringIndexOutOfBounds {
                spring: 0,
                index,
                count,
            });
        }
    }
    Ok(Spring::new(p0, p1, positions[p0].distance(positions[p1])))
}

/// One spring per unique triangle edge, in order of first appearance
pub fn springs_from_triangles(
    positions: &[Vec3],
    triangles: &[[usize; 3]],
) -> Result<Vec<Spring>, StepError> {
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut springs = Vec::new();

    for [a, b, c] in triangles.iter().copied() {
        for (p0, p1) in [(a, b), (b, c), (c, a)] {
            if p0 == p1 {
                continue;
            }
            let key = (p0.min(p1), p0.max(p1));
            if !seen.insert(key) {
                continue;
            }
            let spring = spring_between(positions, p0, p1).map_err(|e| match e {
                StepError::SpringIndexOutOfBounds { index, count, .. } => {
                    StepError::SpringIndexOutOfBounds {
                        spring: springs.len(),
                        index,
                        count,
                    }
                }
                other => other,
            })?;
            springs.push(spring);
        }
    }

    Ok(springs)
}

/// Particle positions and springs for a cloth grid.
///
/// Particle `(col, row)` has index `row * cols + col`.
pub fn cloth_grid(spec: &GridSpec) -> (Vec<Vec3>, Vec<Spring>) {
    let cols = spec.cols;
    let rows = spec.rows;
    let idx = |col: usize, row: usize| row * cols + col;

    let mut positions = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            positions.push(spec.origin + Vec3::new(col as f32, row as f32, 0.0) * spec.spacing);
        }
    }

    let diagonal = spec.spacing * std::f32::consts::SQRT_2;
    let mut springs = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            if col + 1 < cols {
                springs.push(Spring::new(idx(col, row), idx(col + 1, row), spec.spacing));
            }
            if row + 1 < rows {
                springs.push(Spring::new(idx(col, row), idx(col, row + 1), spec.spacing));
            }
            if spec.shear && col + 1 < cols && row + 1 < rows {
                springs.push(Spring::new(idx(col, row), idx(col + 1, row + 1), diagonal));
                springs.push(Spring::new(idx(col + 1, row), idx(col, row + 1), diagonal));
            }
        }
    }

    (positions, springs)
}
