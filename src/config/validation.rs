//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{AxisConfig, JointMove, LimitPolicy, ProfileMove, SystemConfig};

/// Validate a system configuration.
///
/// Checks:
/// - Axis limits are positive and finite
/// - Soft limits are valid (min < max)
/// - Moves reference existing axes
/// - Durations, step counts, ramp fractions, and intervals are in range
/// - Move endpoints respect soft limits with the reject policy
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    // Validate axes
    for (_, axis) in config.axes.iter() {
        validate_axis(axis)?;
    }

    // Validate single-axis moves
    for (_, preview) in config.moves.iter() {
        validate_profile_move(preview, config)?;
    }

    // Validate joint moves
    for (_, joint) in config.joint_moves.iter() {
        validate_joint_move(joint, config)?;
    }

    Ok(())
}

fn validate_axis(axis: &AxisConfig) -> Result<()> {
    if !axis.velocity_limit.is_finite() || axis.velocity_limit <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidVelocityLimit(
            axis.velocity_limit,
        )));
    }

    if !axis.acceleration_limit.is_finite() || axis.acceleration_limit <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidAccelerationLimit(
            axis.acceleration_limit,
        )));
    }

    // Soft limits: min must be < max
    if let Some(ref limits) = axis.limits {
        if !limits.is_valid() {
            return Err(Error::Config(ConfigError::InvalidSoftLimits {
                min: limits.min,
                max: limits.max,
            }));
        }
    }

    Ok(())
}

fn lookup_axis<'a>(config: &'a SystemConfig, name: &heapless::String<32>) -> Result<&'a AxisConfig> {
    config
        .axis(name.as_str())
        .ok_or_else(|| Error::Config(ConfigError::AxisNotFound(name.clone())))
}

fn check_endpoint(axis: &AxisConfig, target: f64) -> Result<()> {
    if let Some(ref limits) = axis.limits {
        // Clamped endpoints are adjusted at planning time
        if limits.policy == LimitPolicy::Reject && !limits.contains(target) {
            return Err(Error::Config(ConfigError::TargetExceedsLimits {
                target,
                min: limits.min,
                max: limits.max,
            }));
        }
    }
    Ok(())
}

fn validate_profile_move(preview: &ProfileMove, config: &SystemConfig) -> Result<()> {
    if !preview.duration.is_positive() {
        return Err(Error::Config(ConfigError::InvalidDuration(preview.duration.0)));
    }

    if preview.steps == 0 {
        return Err(Error::Config(ConfigError::InvalidSteps(preview.steps)));
    }

    let fraction = preview.accel_fraction;
    if !(fraction > 0.0 && fraction <= 0.5) {
        return Err(Error::Config(ConfigError::InvalidAccelFraction(fraction)));
    }

    if let Some(ref name) = preview.axis {
        let axis = lookup_axis(config, name)?;
        check_endpoint(axis, preview.start)?;
        check_endpoint(axis, preview.end)?;
    }

    Ok(())
}

fn validate_joint_move(joint: &JointMove, config: &SystemConfig) -> Result<()> {
    let axis_a = lookup_axis(config, &joint.axis_a)?;
    let axis_b = lookup_axis(config, &joint.axis_b)?;

    if !joint.interval.is_positive() {
        return Err(Error::Config(ConfigError::InvalidInterval(joint.interval.0)));
    }

    check_endpoint(axis_a, joint.start_a)?;
    check_endpoint(axis_a, joint.end_a)?;
    check_endpoint(axis_b, joint.start_b)?;
    check_endpoint(axis_b, joint.end_b)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::Seconds;
    use crate::config::SoftLimits;

    fn axis(velocity_limit: f64, acceleration_limit: f64) -> AxisConfig {
        AxisConfig {
            name: heapless::String::try_from("test").unwrap(),
            velocity_limit,
            acceleration_limit,
            limits: None,
        }
    }

    #[test]
    fn test_invalid_velocity_limit() {
        let result = validate_axis(&axis(-1.0, 10.0));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidVelocityLimit(_)))
        ));
    }

    #[test]
    fn test_invalid_acceleration_limit() {
        let result = validate_axis(&axis(1.0, f64::INFINITY));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidAccelerationLimit(_)))
        ));
    }

    #[test]
    fn test_invalid_accel_fraction() {
        let preview = ProfileMove {
            axis: None,
            start: 0.0,
            end: 1.0,
            duration: Seconds(1.0),
            steps: 10,
            accel_fraction: 0.6,
        };

        let result = validate_profile_move(&preview, &SystemConfig::default());
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidAccelFraction(_)))
        ));
    }

    #[test]
    fn test_endpoint_policy() {
        let mut limited = axis(1.0, 1.0);
        limited.limits = Some(SoftLimits::new(0.0, 10.0, LimitPolicy::Reject));
        assert!(check_endpoint(&limited, 5.0).is_ok());
        assert!(check_endpoint(&limited, 11.0).is_err());

        limited.limits = Some(SoftLimits::new(0.0, 10.0, LimitPolicy::Clamp));
        assert!(check_endpoint(&limited, 11.0).is_ok());
    }
}
