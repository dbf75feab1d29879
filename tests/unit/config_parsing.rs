//! Unit tests for TOML configuration parsing.

use std::io::Write;

use motion_profile::config::{load_config, LimitPolicy, SystemConfig};
use motion_profile::error::{ConfigError, Error};

/// Test parsing a valid axis configuration from TOML.
#[test]
fn test_parse_axis_config() {
    let toml_str = r#"
[axes.radial]
name = "radial_axis"
velocity_limit = 120.0
acceleration_limit = 240.0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let axis = config.axis("radial").expect("Axis not found");

    assert_eq!(axis.name.as_str(), "radial_axis");
    assert_eq!(axis.velocity_limit, 120.0);
    assert_eq!(axis.acceleration_limit, 240.0);
    assert!(axis.limits.is_none());
}

/// Test parsing soft limits with and without an explicit policy.
#[test]
fn test_parse_axis_with_limits() {
    let toml_str = r#"
[axes.radial]
name = "radial_axis"
velocity_limit = 120.0
acceleration_limit = 240.0

[axes.radial.limits]
min = 0.0
max = 300.0
policy = "clamp"

[axes.angular]
name = "angular_axis"
velocity_limit = 90.0
acceleration_limit = 180.0

[axes.angular.limits]
min = -180.0
max = 180.0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    let radial = config.axis("radial").unwrap().limits.unwrap();
    assert_eq!(radial.policy, LimitPolicy::Clamp);
    assert_eq!(radial.max, 300.0);

    let angular = config.axis("angular").unwrap().limits.unwrap();
    assert_eq!(angular.policy, LimitPolicy::Reject);
    assert_eq!(angular.min, -180.0);
}

/// Test move defaults for step count and ramp fraction.
#[test]
fn test_parse_move_defaults() {
    let toml_str = r#"
[axes.x]
name = "x"
velocity_limit = 1.0
acceleration_limit = 1.0

[moves.nudge]
start = 0.0
end = 2.0
duration_secs = 4.0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let nudge = config.profile_move("nudge").expect("Move not found");

    assert!(nudge.axis.is_none());
    assert_eq!(nudge.steps, 100);
    assert_eq!(nudge.accel_fraction, 0.5);
    assert_eq!(nudge.accel_time(), 2.0);
    assert_eq!(nudge.displacement(), 2.0);

    let times = nudge.times().unwrap();
    assert_eq!(times.len(), 101);
    assert_eq!(times[0], 0.0);
    assert_eq!(*times.last().unwrap(), 4.0);
}

/// Test parsing a joint move.
#[test]
fn test_parse_joint_move() {
    let toml_str = r#"
[axes.a]
name = "a"
velocity_limit = 1.0
acceleration_limit = 1.0

[axes.b]
name = "b"
velocity_limit = 1.0
acceleration_limit = 1.0

[joint_moves.cross]
axis_a = "a"
axis_b = "b"
start_a = 0.0
end_a = 1.0
start_b = 1.0
end_b = 0.0
interval_secs = 0.05
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let cross = config.joint_move("cross").expect("Joint move not found");

    assert_eq!(cross.axis_a.as_str(), "a");
    assert_eq!(cross.axis_b.as_str(), "b");
    assert_eq!(cross.end_b, 0.0);
    assert_eq!(cross.interval.value(), 0.05);
}

/// Test that an unknown limit policy is rejected by the parser.
#[test]
fn test_invalid_policy_rejected() {
    let toml_str = r#"
[axes.x]
name = "x"
velocity_limit = 1.0
acceleration_limit = 1.0

[axes.x.limits]
min = 0.0
max = 1.0
policy = "wrap"
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err());
}

/// Test loading and validating a configuration file.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join(format!("motion-profile-{}.toml", std::process::id()));
    let mut file = std::fs::File::create(&path).expect("Failed to create file");
    writeln!(
        file,
        r#"
[axes.x]
name = "x"
velocity_limit = 2.0
acceleration_limit = 4.0
"#
    )
    .unwrap();
    drop(file);

    let config = load_config(&path).expect("Failed to load config");
    let _ = std::fs::remove_file(&path);

    assert_eq!(config.axis_names().collect::<Vec<_>>(), vec!["x"]);
}

/// Test that a missing file is reported as an I/O error.
#[test]
fn test_load_missing_file() {
    let result = load_config("/nonexistent/motion.toml");
    assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
}
