use crate::config::{ConfigError, SceneConfig};
use crate::engine::{ParticleState, SimConstants, Spring, Vec3};
use crate::error::StepError;
use crate::stepper::{self, validate_constants, validate_springs};

/// Particle system state kept across steps
#[derive(Debug, Clone)]
pub struct Simulation {
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    initial_positions: Vec<Vec3>,
    springs: Vec<Spring>,
    constants: SimConstants,
    current_step: usize,
}

impl Simulation {
    /// Build a simulation with every particle at rest
    pub fn new(
        positions: Vec<Vec3>,
        springs: Vec<Spring>,
        constants: SimConstants,
    ) -> Result<Self, StepError> {
        validate_constants(&constants)?;
        validate_springs(&springs, positions.len())?;

        let velocities = vec![Vec3::ZERO; positions.len()];
        Ok(Self {
            initial_positions: positions.clone(),
            positions,
            velocities,
            springs,
            constants,
            current_step: 0,
        })
    }

    /// Build a simulation from a loaded scene description
    pub fn from_scene(scene: &SceneConfig) -> Result<Self, ConfigError> {
        let (positions, velocities, springs) = scene.build_particles()?;
        let sim = Self::new(positions, springs, scene.constants)?.with_velocities(velocities)?;
        Ok(sim)
    }

    pub fn with_velocities(mut self, velocities: Vec<Vec3>) -> Result<Self, StepError> {
        if velocities.len() != self.positions.len() {
            return Err(StepError::LengthMismatch {
                positions: self.positions.len(),
                velocities: velocities.len(),
            });
        }
        self.velocities = velocities;
        Ok(self)
    }

    pub fn step(&mut self, dt: f32) -> Result<(), StepError> {
        stepper::step(
            dt,
            &mut self.positions,
            &mut self.velocities,
            &self.springs,
            &self.constants,
        )?;
        self.current_step += 1;
        Ok(())
    }

    pub fn run(&mut self, dt: f32, steps: usize) -> Result<(), StepError> {
        for _ in 0..steps {
            self.step(dt)?;
        }
        Ok(())
    }

    /// Back to the initial pose, at rest
    pub fn reset(&mut self) {
        self.positions.copy_from_slice(&self.initial_positions);
        self.velocities.fill(Vec3::ZERO);
        self.current_step = 0;
    }

    pub fn particle_states(&self) -> Vec<ParticleState> {
        self.positions
            .iter()
            .zip(&self.velocities)
            .enumerate()
            .map(|(index, (pos, vel))| ParticleState {
                index,
                pos: *pos,
                vel: *vel,
            })
            .collect()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    /// Replace the spring set; the particle count stays fixed
    pub fn set_springs(&mut self, springs: Vec<Spring>) -> Result<(), StepError> {
        validate_springs(&springs, self.positions.len())?;
        self.springs = springs;
        Ok(())
    }

    pub fn constants(&self) -> &SimConstants {
        &self.constants
    }

    /// Constants are re-checked on every step, so edits here are not validated
    pub fn constants_mut(&mut self) -> &mut SimConstants {
        &mut self.constants
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn particle_count(&self) -> usize {
        self.positions.len()
    }

    pub fn kinetic_energy(&self) -> f32 {
        self.velocities
            .iter()
            .map(|v| 0.5 * self.constants.mass * v.length_squared())
            .sum()
    }
}
