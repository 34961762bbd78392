// Host-side tests for physical constants and startup validation.

use spring_core::*;

#[test]
fn defaults_come_from_constants_and_validate() {
    let p = PhysicsParams::default();
    assert_eq!(p.equilibrium, EQUILIBRIUM_X);
    assert_eq!(p.stiffness, SPRING_STIFFNESS);
    assert_eq!(p.mass, OBJ_MASS);
    assert_eq!(p.damping, DAMPING_COEFFICIENT);
    assert_eq!(p.start_velocity, START_VELOCITY);
    assert_eq!(p.epsilon, EPSILON);
    assert_eq!(p.threshold, THRESHOLD);
    assert_eq!(p.validate(), Ok(()));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn layout_constants_are_consistent() {
    // Equilibrium centers the mass horizontally.
    assert_eq!(EQUILIBRIUM_X + RECT_SIZE / 2.0, WIDTH / 2.0);
    // Equilibrium is reachable by dragging.
    assert!(DRAG_MIN_X <= EQUILIBRIUM_X && EQUILIBRIUM_X <= DRAG_MAX_X);
    // Release threshold is much larger than the settle epsilon.
    assert!(THRESHOLD > EPSILON);
    assert_eq!(SPRING_NUM % 2, 0);
}

#[test]
fn non_positive_mass_is_rejected() {
    for mass in [0.0, -1.0] {
        let p = PhysicsParams {
            mass,
            ..PhysicsParams::default()
        };
        assert_eq!(p.validate(), Err(ConfigError::NonPositiveMass(mass)));
    }
}

#[test]
fn other_bad_values_are_rejected() {
    let base = PhysicsParams::default();

    let p = PhysicsParams {
        stiffness: 0.0,
        ..base.clone()
    };
    assert_eq!(p.validate(), Err(ConfigError::NonPositiveStiffness(0.0)));

    let p = PhysicsParams {
        damping: -0.5,
        ..base.clone()
    };
    assert_eq!(p.validate(), Err(ConfigError::NegativeDamping(-0.5)));

    let p = PhysicsParams {
        epsilon: 0.0,
        ..base.clone()
    };
    assert_eq!(p.validate(), Err(ConfigError::NonPositiveEpsilon(0.0)));

    let p = PhysicsParams {
        threshold: -1.0,
        ..base.clone()
    };
    assert_eq!(p.validate(), Err(ConfigError::NegativeThreshold(-1.0)));

    let p = PhysicsParams {
        mass: f32::NAN,
        ..base
    };
    assert_eq!(p.validate(), Err(ConfigError::NonFinite("mass")));
}

#[test]
fn undamped_params_are_allowed() {
    let p = PhysicsParams {
        damping: 0.0,
        ..PhysicsParams::default()
    };
    assert!(p.validate().is_ok());
}

#[test]
fn config_error_messages_name_the_field() {
    let msg = ConfigError::NonPositiveMass(0.0).to_string();
    assert!(msg.contains("mass"), "{msg}");
    let msg = ConfigError::NonFinite("stiffness").to_string();
    assert!(msg.contains("stiffness"), "{msg}");
}
