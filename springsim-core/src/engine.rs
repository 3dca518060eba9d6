pub use glam::Vec3;
use serde::Deserialize;

/// A damped Hookean spring between two particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub p0: usize, // particle index
    pub p1: usize, // particle index
    pub rest: f32, // rest length
}

impl Spring {
    pub fn new(p0: usize, p1: usize, rest: f32) -> Self {
        Self { p0, p1, rest }
    }
}

/// Constants shared by every particle for one step
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConstants {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub gravity: Vec3,
    pub restitution: f32,
}

impl SimConstants {
    pub fn new() -> Self {
        Self {
            stiffness: 0.0,
            damping: 0.0,
            mass: 1.0,
            gravity: Vec3::ZERO,
            restitution: 1.0,
        }
    }

    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec3) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution;
        self
    }
}

impl Default for SimConstants {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of one particle, as handed to a renderer or printed by the CLI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleState {
    pub index: usize,
    pub pos: Vec3,
    pub vel: Vec3,
}
