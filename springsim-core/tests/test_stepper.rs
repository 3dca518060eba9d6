//! Tests for the full step and its input validation

use springsim_core::engine::{SimConstants, Spring, Vec3};
use springsim_core::tests::test_helpers::{chain, spring_only, two_particles};
use springsim_core::{step, validate, StepError};

#[test]
fn test_spring_equilibrium_unchanged() {
    let (mut positions, mut velocities) = two_particles(0.5);
    let springs = [Spring::new(0, 1, 0.5)];
    let before = (positions.clone(), velocities.clone());

    step(0.01, &mut positions, &mut velocities, &springs, &spring_only(25.0)).unwrap();

    assert_eq!((positions, velocities), before);
}

#[test]
fn test_rest_state_with_zero_dt_is_idempotent() {
    let (mut positions, springs) = chain(4, 0.25);
    let mut velocities = vec![Vec3::ZERO; positions.len()];
    let constants = spring_only(80.0).with_damping(0.5).with_restitution(0.3);
    let before = (positions.clone(), velocities.clone());

    for _ in 0..10 {
        step(0.0, &mut positions, &mut velocities, &springs, &constants).unwrap();
    }

    assert_eq!((positions, velocities), before);
}

#[test]
fn test_empty_system_is_valid() {
    let mut positions: Vec<Vec3> = Vec::new();
    let mut velocities: Vec<Vec3> = Vec::new();

    step(0.01, &mut positions, &mut velocities, &[], &SimConstants::default()).unwrap();
}

#[test]
fn test_coincident_particles_stay_finite() {
    let mut positions = vec![Vec3::new(0.2, 0.2, 0.2); 2];
    let mut velocities = vec![Vec3::ZERO; 2];
    let springs = [Spring::new(0, 1, 0.1)];
    let constants = spring_only(10.0).with_damping(1.0);

    step(0.01, &mut positions, &mut velocities, &springs, &constants).unwrap();

    assert!(positions.iter().all(|p| p.is_finite()));
    assert!(velocities.iter().all(|v| v.is_finite()));
}

#[test]
fn test_out_of_range_spring_rejected() {
    let (mut positions, mut velocities) = two_particles(0.5);
    let springs = [Spring::new(0, 1, 0.5), Spring::new(1, 2, 0.5)];
    let constants = SimConstants::new().with_gravity(Vec3::new(0.0, -9.8, 0.0));
    let before = (positions.clone(), velocities.clone());

    let err = step(0.01, &mut positions, &mut velocities, &springs, &constants).unwrap_err();

    assert_eq!(
        err,
        StepError::SpringIndexOutOfBounds {
            spring: 1,
            index: 2,
            count: 2
        }
    );
    // Nothing moved even though gravity is on
    assert_eq!((positions, velocities), before);
}

#[test]
fn test_length_mismatch_rejected() {
    let mut positions = vec![Vec3::ZERO; 3];
    let mut velocities = vec![Vec3::ZERO; 2];

    let err = step(0.01, &mut positions, &mut velocities, &[], &SimConstants::new()).unwrap_err();

    assert_eq!(
        err,
        StepError::LengthMismatch {
            positions: 3,
            velocities: 2
        }
    );
}

#[test]
fn test_invalid_constants_rejected() {
    let (positions, velocities) = two_particles(0.5);
    let check = |dt: f32, constants: SimConstants| {
        validate(dt, &positions, &velocities, &[], &constants)
    };

    assert_eq!(check(0.01, SimConstants::new().with_mass(0.0)), Err(StepError::InvalidMass(0.0)));
    assert_eq!(check(0.01, SimConstants::new().with_mass(-1.0)), Err(StepError::InvalidMass(-1.0)));
    assert_eq!(check(-0.01, SimConstants::new()), Err(StepError::InvalidTimeStep(-0.01)));
    assert!(matches!(check(f32::NAN, SimConstants::new()), Err(StepError::InvalidTimeStep(_))));
    assert_eq!(
        check(0.01, SimConstants::new().with_stiffness(-2.0)),
        Err(StepError::NegativeStiffness(-2.0))
    );
    assert_eq!(
        check(0.01, SimConstants::new().with_damping(-0.1)),
        Err(StepError::NegativeDamping(-0.1))
    );
    assert_eq!(check(0.0, SimConstants::new()), Ok(()));
}

#[test]
fn test_negative_rest_length_rejected() {
    let (positions, velocities) = two_particles(0.5);
    let springs = [Spring::new(0, 1, -0.5)];

    let err = validate(0.01, &positions, &velocities, &springs, &SimConstants::new()).unwrap_err();

    assert_eq!(err, StepError::NegativeRestLength { spring: 0, rest: -0.5 });
}

#[test]
fn test_error_messages_are_descriptive() {
    let err = StepError::SpringIndexOutOfBounds {
        spring: 3,
        index: 9,
        count: 4,
    };
    assert_eq!(
        err.to_string(),
        "spring 3 references particle 9, but there are only 4 particles"
    );
    assert!(StepError::InvalidMass(0.0).to_string().contains("mass"));
}

#[test]
fn test_restitution_is_not_clamped() {
    let mut positions = vec![Vec3::new(1.1, 0.0, 0.0)];
    let mut velocities = vec![Vec3::new(1.0, 0.0, 0.0)];
    let constants = SimConstants::new().with_restitution(1.5);

    step(0.0, &mut positions, &mut velocities, &[], &constants).unwrap();

    assert_eq!(velocities[0].x, -1.5);
    assert!((positions[0].x - 0.85).abs() < 1e-6);
}
