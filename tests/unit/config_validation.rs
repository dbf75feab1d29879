//! Unit tests for configuration validation.

use motion_profile::config::{validate_config, SystemConfig};
use motion_profile::error::{ConfigError, Error};

const AXES: &str = r#"
[axes.radial]
name = "radial"
velocity_limit = 120.0
acceleration_limit = 240.0

[axes.radial.limits]
min = 0.0
max = 300.0

[axes.angular]
name = "angular"
velocity_limit = 90.0
acceleration_limit = 180.0
"#;

fn with_axes(extra: &str) -> SystemConfig {
    toml::from_str(&format!("{AXES}{extra}")).expect("Failed to parse TOML")
}

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let config = with_axes(
        r#"
[moves.extend]
axis = "radial"
start = 10.0
end = 250.0
duration_secs = 3.0

[joint_moves.reach]
axis_a = "radial"
axis_b = "angular"
start_a = 10.0
end_a = 200.0
start_b = 0.0
end_b = 90.0
interval_secs = 0.01
"#,
    );
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for a joint move referencing a non-existent axis.
#[test]
fn test_joint_move_invalid_axis_reference() {
    let config = with_axes(
        r#"
[joint_moves.bad_ref]
axis_a = "radial"
axis_b = "vertical"
start_a = 0.0
end_a = 1.0
start_b = 0.0
end_b = 1.0
interval_secs = 0.01
"#,
    );
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::AxisNotFound(_)))
    ));
}

/// Test validation fails for a ramp longer than half the move.
#[test]
fn test_invalid_accel_fraction() {
    let config = with_axes(
        r#"
[moves.too_long]
start = 0.0
end = 1.0
duration_secs = 1.0
accel_fraction = 0.75
"#,
    );
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidAccelFraction(_)))
    ));
}

/// Test validation fails for zero duration and zero steps.
#[test]
fn test_invalid_duration_and_steps() {
    let config = with_axes(
        r#"
[moves.instant]
start = 0.0
end = 1.0
duration_secs = 0.0
"#,
    );
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidDuration(_)))
    ));

    let config = with_axes(
        r#"
[moves.unsampled]
start = 0.0
end = 1.0
duration_secs = 1.0
steps = 0
"#,
    );
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidSteps(0)))
    ));
}

/// Test validation fails for a non-positive sampling interval.
#[test]
fn test_invalid_interval() {
    let config = with_axes(
        r#"
[joint_moves.reach]
axis_a = "radial"
axis_b = "angular"
start_a = 0.0
end_a = 1.0
start_b = 0.0
end_b = 1.0
interval_secs = -0.01
"#,
    );
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidInterval(_)))
    ));
}

/// Test validation fails for an endpoint beyond rejecting soft limits.
#[test]
fn test_endpoint_exceeds_limits() {
    let config = with_axes(
        r#"
[moves.overreach]
axis = "radial"
start = 10.0
end = 400.0
duration_secs = 3.0
"#,
    );
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::TargetExceedsLimits { target, .. })) if target == 400.0
    ));
}

/// Test validation fails for invalid soft limits (min >= max).
#[test]
fn test_invalid_soft_limits() {
    let toml_str = r#"
[axes.x]
name = "bad_limits"
velocity_limit = 1.0
acceleration_limit = 1.0

[axes.x.limits]
min = 90.0
max = -90.0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidSoftLimits { .. }))
    ));
}

/// Test validation fails for a zero acceleration limit.
#[test]
fn test_invalid_acceleration_limit() {
    let toml_str = r#"
[axes.x]
name = "x"
velocity_limit = 1.0
acceleration_limit = 0.0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidAccelerationLimit(_)))
    ));
}

/// Test that empty configuration is valid.
#[test]
fn test_empty_config_is_valid() {
    let config = SystemConfig::default();
    assert!(validate_config(&config).is_ok());
}
