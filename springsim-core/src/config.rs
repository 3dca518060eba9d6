//! Scene files
//!
//! A scene is a TOML document describing the initial particles, the springs
//! between them, the shared constants and how long to run:
//!
//! ```toml
//! dt = 0.01
//! steps = 200
//!
//! [constants]
//! stiffness = 50.0
//! damping = 0.2
//! mass = 0.1
//! gravity = [0.0, -9.8, 0.0]
//! restitution = 0.8
//!
//! [[particles]]
//! position = [0.0, 0.5, 0.0]
//!
//! [[particles]]
//! position = [0.2, 0.5, 0.0]
//! velocity = [0.0, 1.0, 0.0]
//!
//! [[springs]]
//! p0 = 0
//! p1 = 1
//! ```
//!
//! A `[grid]` table generates a cloth patch instead of (or in addition to)
//! listing particles. Grid particles come first, so explicit particles and
//! springs index after them. A spring without `rest` uses the initial
//! distance between its endpoints. Unknown keys are rejected.

use crate::engine::{SimConstants, Spring, Vec3};
use crate::error::StepError;
use crate::stepper::validate_constants;
use crate::topology::{cloth_grid, spring_between, GridSpec};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Upper bound on the particles a `[grid]` table may generate
pub const MAX_GRID_PARTICLES: usize = 1 << 24;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scene: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scene: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("scene has no particles")]
    EmptyScene,

    #[error("grid of {cols} x {rows} particles exceeds the limit of {}", MAX_GRID_PARTICLES)]
    GridTooLarge { cols: usize, rows: usize },

    #[error("invalid scene: {0}")]
    Invalid(#[from] StepError),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParticleConfig {
    pub position: Vec3,
    #[serde(default)]
    pub velocity: Vec3,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpringConfig {
    pub p0: usize,
    pub p1: usize,
    pub rest: Option<f32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    pub cols: usize,
    pub rows: usize,
    pub spacing: f32,
    #[serde(default)]
    pub origin: Vec3,
    #[serde(default = "default_shear")]
    pub shear: bool,
}

fn default_shear() -> bool {
    true
}

fn default_dt() -> f32 {
    0.01
}

fn default_steps() -> usize {
    100
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    #[serde(default = "default_dt")]
    pub dt: f32,
    #[serde(default = "default_steps")]
    pub steps: usize,
    #[serde(default)]
    pub constants: SimConstants,
    #[serde(default)]
    pub particles: Vec<ParticleConfig>,
    #[serde(default)]
    pub springs: Vec<SpringConfig>,
    pub grid: Option<GridConfig>,
}

impl SceneConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Check the time step, constants and grid size before anything is built
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.dt.is_finite() || self.dt < 0.0 {
            return Err(StepError::InvalidTimeStep(self.dt).into());
        }
        validate_constants(&self.constants)?;

        if let Some(grid) = &self.grid {
            match grid.cols.checked_mul(grid.rows) {
                Some(count) if count <= MAX_GRID_PARTICLES => {}
                _ => {
                    return Err(ConfigError::GridTooLarge {
                        cols: grid.cols,
                        rows: grid.rows,
                    })
                }
            }
        }
        Ok(())
    }

    /// Initial positions, velocities and springs described by the scene
    pub fn build_particles(&self) -> Result<(Vec<Vec3>, Vec<Vec3>, Vec<Spring>), ConfigError> {
        self.validate()?;

        let (mut positions, mut springs) = match &self.grid {
            Some(grid) => cloth_grid(&GridSpec {
                cols: grid.cols,
                rows: grid.rows,
                spacing: grid.spacing,
                origin: grid.origin,
                shear: grid.shear,
            }),
            None => (Vec::new(), Vec::new()),
        };
        let mut velocities = vec![Vec3::ZERO; positions.len()];

        for particle in &self.particles {
            positions.push(particle.position);
            velocities.push(particle.velocity);
        }
        if positions.is_empty() {
            return Err(ConfigError::EmptyScene);
        }

        let offset = springs.len();
        for (i, spring) in self.springs.iter().enumerate() {
            let built = match spring.rest {
                Some(rest) => Spring::new(spring.p0, spring.p1, rest),
                None => spring_between(&positions, spring.p0, spring.p1).map_err(|e| match e {
                    StepError::SpringIndexOutOfBounds { index, count, .. } => {
                        StepError::SpringIndexOutOfBounds {
                            spring: offset + i,
                            index,
                            count,
                        }
                    }
                    other => other,
                })?,
            };
            springs.push(built);
        }

        Ok((positions, velocities, springs))
    }
}
