//! Motion system facade over a parsed configuration.
//!
//! Plans and checks the named moves of a [`SystemConfig`] without the caller
//! having to look up axes, resolve soft limits, or build sample grids.

use heapless::String;

use crate::config::{AxisConfig, SystemConfig};
use crate::error::{ConfigError, Error, Result};
use crate::kinematics::{self, CylindricalPose};
use crate::motion::{
    check_trace, profile, JointRequest, JointTrace, LimitReport, MotionTrace, TraceLimits,
};

/// A facade for planning named moves from configuration.
///
/// `MotionSystem` provides a high-level API for:
/// - Previewing single-axis moves on their configured grid
/// - Synchronizing two-axis moves on a shared grid
/// - Checking computed traces against axis limits
///
/// # Example
///
/// ```rust,ignore
/// use motion_profile::{parse_config, MotionSystem};
///
/// let system = MotionSystem::from_config(parse_config(CONFIG_TOML)?);
///
/// let trace = system.plan_joint_move("reach")?;
/// let (report_a, report_b) = system.check_joint_move("reach", &trace)?;
/// assert!(report_a.passed() && report_b.passed());
/// ```
#[derive(Debug, Clone)]
pub struct MotionSystem {
    /// The system configuration.
    config: SystemConfig,
}

impl MotionSystem {
    /// Create a new motion system from configuration.
    pub fn from_config(config: SystemConfig) -> Self {
        Self { config }
    }

    /// Get the system configuration.
    #[inline]
    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Get an axis configuration by name.
    pub fn axis(&self, name: &str) -> Result<&AxisConfig> {
        self.config
            .axis(name)
            .ok_or_else(|| Error::Config(ConfigError::AxisNotFound(truncated(name))))
    }

    /// Check if an axis exists in configuration.
    pub fn has_axis(&self, name: &str) -> bool {
        self.config.axis(name).is_some()
    }

    /// Compute the preview trace of a named single-axis move.
    ///
    /// If the move names an axis, its endpoints are first resolved against
    /// the axis's soft limits.
    ///
    /// # Errors
    ///
    /// Returns an error if the move or its axis doesn't exist, an endpoint is
    /// rejected by the soft limits, or the move parameters are invalid.
    pub fn plan_move(&self, name: &str) -> Result<MotionTrace> {
        let preview = self.config.profile_move(name).ok_or_else(|| move_not_found(name))?;

        let (start, end) = match preview.axis {
            Some(ref axis_name) => {
                let axis = self.axis(axis_name.as_str())?;
                (resolve(axis, preview.start)?, resolve(axis, preview.end)?)
            }
            None => (preview.start, preview.end),
        };

        let times = preview.times()?;
        log::debug!("Planning move {} from {} to {}", name, start, end);

        Ok(profile(end - start, start, &times, preview.accel_time())?)
    }

    /// Compute the synchronized trace of a named joint move.
    ///
    /// # Errors
    ///
    /// Returns an error if the move or either axis doesn't exist, an endpoint
    /// is rejected by the soft limits, or the axes cannot be synchronized.
    pub fn plan_joint_move(&self, name: &str) -> Result<JointTrace> {
        Ok(self.joint_request(name)?.interpolate()?)
    }

    /// Build the joint request of a named joint move without evaluating it.
    pub fn joint_request(&self, name: &str) -> Result<JointRequest> {
        let joint = self.config.joint_move(name).ok_or_else(|| move_not_found(name))?;
        let axis_a = self.axis(joint.axis_a.as_str())?;
        let axis_b = self.axis(joint.axis_b.as_str())?;

        let request = JointRequest {
            a: axis_a.axis_move(resolve(axis_a, joint.start_a)?, resolve(axis_a, joint.end_a)?),
            b: axis_b.axis_move(resolve(axis_b, joint.start_b)?, resolve(axis_b, joint.end_b)?),
            interval: joint.interval.0,
        };

        log::debug!(
            "Planning joint move {} ({}: {}, {}: {})",
            name,
            joint.axis_a,
            request.a.displacement,
            joint.axis_b,
            request.b.displacement
        );

        Ok(request)
    }

    /// Check a trace of a named single-axis move.
    ///
    /// Without an axis only the end position is checked.
    pub fn check_move(&self, name: &str, trace: &MotionTrace) -> Result<LimitReport> {
        let preview = self.config.profile_move(name).ok_or_else(|| move_not_found(name))?;

        match preview.axis {
            Some(ref axis_name) => {
                let axis = self.axis(axis_name.as_str())?;
                let target = resolve(axis, preview.end)?;
                Ok(check_trace(
                    trace,
                    &axis.trace_limits(target),
                    axis.limits.as_ref(),
                ))
            }
            None => Ok(check_trace(trace, &TraceLimits::ending_at(preview.end), None)),
        }
    }

    /// Check both axes of a trace of a named joint move.
    pub fn check_joint_move(
        &self,
        name: &str,
        trace: &JointTrace,
    ) -> Result<(LimitReport, LimitReport)> {
        let joint = self.config.joint_move(name).ok_or_else(|| move_not_found(name))?;
        let axis_a = self.axis(joint.axis_a.as_str())?;
        let axis_b = self.axis(joint.axis_b.as_str())?;

        let report_a = check_trace(
            &trace.a,
            &axis_a.trace_limits(resolve(axis_a, joint.end_a)?),
            axis_a.limits.as_ref(),
        );
        let report_b = check_trace(
            &trace.b,
            &axis_b.trace_limits(resolve(axis_b, joint.end_b)?),
            axis_b.limits.as_ref(),
        );

        Ok((report_a, report_b))
    }

    /// Plan a cylindrical arm reach between two `(x, y)` points.
    ///
    /// `radial` and `angular` name the axes driving the arm's extension and
    /// rotation (in degrees). Both joint endpoints are resolved against the
    /// axes' soft limits. The arm turns the short way round unless that end
    /// angle lies outside the angular limits and the direct one does not.
    ///
    /// # Errors
    ///
    /// Returns an error if either axis doesn't exist, a joint endpoint is
    /// rejected by the soft limits, or the move cannot be planned.
    pub fn plan_reach(
        &self,
        radial: &str,
        angular: &str,
        from: (f64, f64),
        to: (f64, f64),
        interval: f64,
    ) -> Result<JointTrace> {
        let radial = self.axis(radial)?;
        let angular = self.axis(angular)?;

        let start = CylindricalPose::from_cartesian(from.0, from.1);
        let end = CylindricalPose::from_cartesian(to.0, to.1);

        let near = kinematics::shortest_turn(start.theta, end.theta).value();
        let direct = end.theta.value();
        let end_theta = match angular.limits {
            Some(limits) if !limits.contains(near) && limits.contains(direct) => direct,
            _ => near,
        };

        let request = JointRequest {
            a: radial.axis_move(resolve(radial, start.radius)?, resolve(radial, end.radius)?),
            b: angular.axis_move(resolve(angular, start.theta.value())?, resolve(angular, end_theta)?),
            interval,
        };

        log::debug!(
            "Planning reach ({}, {}) -> ({}, {}): radius {}, angle {}",
            from.0,
            from.1,
            to.0,
            to.1,
            request.a.displacement,
            request.b.displacement
        );

        Ok(request.interpolate()?)
    }
}

fn resolve(axis: &AxisConfig, target: f64) -> Result<f64> {
    axis.resolve_target(target).ok_or_else(|| {
        let (min, max) = axis
            .limits
            .map(|limits| (limits.min, limits.max))
            .unwrap_or((f64::NEG_INFINITY, f64::INFINITY));
        Error::Config(ConfigError::TargetExceedsLimits { target, min, max })
    })
}

fn move_not_found(name: &str) -> Error {
    Error::Config(ConfigError::MoveNotFound(truncated(name)))
}

fn truncated(name: &str) -> String<32> {
    let mut out = String::new();
    for c in name.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
