//! Mass-spring particle simulation
//!
//! Advances a set of particles connected by damped springs by one time step
//! at a time: gravity and spring forces are accumulated, velocities and
//! positions are integrated with semi-implicit Euler, and particles leaving
//! the `[-1, 1]^3` cube bounce back in.

pub mod collision;
pub mod config;
pub mod engine;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod runtime;
pub mod stepper;
pub mod topology;

pub use collision::{resolve_boundaries, Bounds};
pub use config::{ConfigError, SceneConfig};
pub use engine::{ParticleState, SimConstants, Spring, Vec3};
pub use error::StepError;
pub use forces::{accumulate_forces, spring_force};
pub use runtime::Simulation;
pub use stepper::{step, validate};
pub use topology::{cloth_grid, spring_between, springs_from_triangles, GridSpec};
