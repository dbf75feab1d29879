//! Two-axis joint interpolation.
//!
//! Both axes are planned on one shared time grid. The axis that needs the
//! most time under its own velocity and acceleration limits sets the move
//! duration; the other axis is re-planned to finish at the same instant.
//!
//! For a cosine-blended profile over displacement `D` and duration `T` with
//! ramp time `Ta`, the peaks reduce to
//!
//! ```text
//! v_peak = D·π / (π·T + (4 − π)·Ta)
//! a_peak = D·π² / (2·Ta·(π·T + (4 − π)·Ta))
//! ```
//!
//! Both fall as `Ta` grows, so the fastest feasible move is the triangular
//! one (`Ta = T/2`), and both limits can be inverted in closed form.

use core::f64::consts::PI;

use libm::{fabs, sqrt};

use crate::error::{InvalidParameter, ProfileError};

use super::grid::sampled_grid;
use super::profile::profile;
use super::trace::{JointTrace, MotionTrace};

/// `4 − π`, the ramp-time coefficient shared by both peak formulas.
const RAMP_COEFFICIENT: f64 = 4.0 - PI;

/// One axis of a joint move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMove {
    /// Target minus start.
    pub displacement: f64,
    /// Initial position.
    pub start: f64,
    /// Velocity magnitude the axis must not exceed.
    pub velocity_limit: f64,
    /// Acceleration magnitude the axis must not exceed.
    pub acceleration_limit: f64,
}

impl AxisMove {
    /// Create an axis move from its start and end positions.
    pub fn between(start: f64, end: f64, velocity_limit: f64, acceleration_limit: f64) -> Self {
        Self {
            displacement: end - start,
            start,
            velocity_limit,
            acceleration_limit,
        }
    }

    /// Check if the axis has nothing to do.
    #[inline]
    pub fn is_stationary(&self) -> bool {
        self.displacement == 0.0
    }

    fn validate(&self) -> Result<(), InvalidParameter> {
        if !self.displacement.is_finite() {
            return Err(InvalidParameter::NonFinite("displacement"));
        }
        if !self.start.is_finite() {
            return Err(InvalidParameter::NonFinite("start"));
        }
        if self.is_stationary() {
            return Ok(());
        }
        if !self.velocity_limit.is_finite() || self.velocity_limit <= 0.0 {
            return Err(InvalidParameter::Limit {
                name: "velocity limit",
                value: self.velocity_limit,
            });
        }
        if !self.acceleration_limit.is_finite() || self.acceleration_limit <= 0.0 {
            return Err(InvalidParameter::Limit {
                name: "acceleration limit",
                value: self.acceleration_limit,
            });
        }
        Ok(())
    }

    /// Shortest duration in which this axis can complete its move.
    ///
    /// A stationary axis imposes no constraint and returns 0.
    pub fn min_duration(&self) -> Result<f64, ProfileError> {
        self.validate()?;
        if self.is_stationary() {
            return Ok(0.0);
        }

        let d = fabs(self.displacement);
        // Triangular profile with v_peak = velocity_limit.
        let velocity_bound = 2.0 * d * PI / (self.velocity_limit * (PI + 4.0));
        // Triangular profile with a_peak = acceleration_limit.
        let acceleration_bound = PI * sqrt(2.0 * d / (self.acceleration_limit * (PI + 4.0)));

        Ok(velocity_bound.max(acceleration_bound))
    }

    /// Ramp time that completes this axis's move in exactly `total_time`.
    ///
    /// Picks the shortest ramp the acceleration limit allows, lengthened if
    /// needed so the cruise velocity stays within the velocity limit, and
    /// never longer than `total_time / 2`.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` for the same inputs [`AxisMove::min_duration`]
    ///   rejects, or a `total_time` that is negative or not finite.
    /// - `InfeasibleProfile` if `total_time` is shorter than the axis's
    ///   minimum duration, so no ramp keeps it within its limits.
    pub fn accel_time_for(&self, total_time: f64) -> Result<f64, ProfileError> {
        self.validate()?;
        if !total_time.is_finite() {
            return Err(InvalidParameter::NonFinite("total time").into());
        }
        if total_time < 0.0 {
            return Err(InvalidParameter::ZeroDuration.into());
        }

        let half = total_time / 2.0;
        if self.is_stationary() {
            return Ok(half);
        }
        if total_time == 0.0 {
            return Err(InvalidParameter::ZeroDuration.into());
        }

        let d = fabs(self.displacement);
        let b = PI * total_time;

        // Root of (4 − π)·Ta² + π·T·Ta − D·π²/(2·a_lim) = 0, in the form that
        // avoids cancellation.
        let c = d * PI * PI / (2.0 * self.acceleration_limit);
        let acceleration_ramp = 2.0 * c / (b + sqrt(b * b + 4.0 * RAMP_COEFFICIENT * c));

        // Smallest Ta keeping D·π / (π·T + (4 − π)·Ta) <= v_lim.
        let velocity_ramp = (d * PI / self.velocity_limit - b) / RAMP_COEFFICIENT;

        let ramp = acceleration_ramp.max(velocity_ramp);
        // Rounding slack for total_time == min_duration().
        if ramp > half * (1.0 + 1e-12) {
            return Err(ProfileError::InfeasibleProfile {
                accel_time: ramp,
                total_time,
            });
        }
        Ok(ramp.min(half))
    }
}

/// A two-axis joint move sampled every `interval` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointRequest {
    /// First axis.
    pub a: AxisMove,
    /// Second axis.
    pub b: AxisMove,
    /// Sampling interval of the shared grid in seconds.
    pub interval: f64,
}

/// Timing chosen for a joint move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointTiming {
    /// Shared total move duration.
    pub total_time: f64,
    /// Ramp time of the first axis.
    pub accel_time_a: f64,
    /// Ramp time of the second axis.
    pub accel_time_b: f64,
}

impl JointRequest {
    /// Choose the shared duration and each axis's ramp time.
    pub fn timing(&self) -> Result<JointTiming, ProfileError> {
        if !self.interval.is_finite() || self.interval <= 0.0 {
            return Err(InvalidParameter::Interval(self.interval).into());
        }
        let duration_a = self.a.min_duration()?;
        let duration_b = self.b.min_duration()?;
        let total_time = duration_a.max(duration_b);

        Ok(JointTiming {
            total_time,
            accel_time_a: self.a.accel_time_for(total_time)?,
            accel_time_b: self.b.accel_time_for(total_time)?,
        })
    }

    /// Plan both axes on the shared time grid.
    ///
    /// If neither axis moves, the result is a single sample at `t = 0`.
    pub fn interpolate(&self) -> Result<JointTrace, ProfileError> {
        let timing = self.timing()?;
        let times = sampled_grid(timing.total_time, self.interval)?;

        if timing.total_time == 0.0 {
            return Ok(JointTrace {
                a: MotionTrace::stationary(self.a.start, &times),
                b: MotionTrace::stationary(self.b.start, &times),
                times,
            });
        }

        log::debug!(
            "joint move: Tm={} Ta_a={} Ta_b={} samples={}",
            timing.total_time,
            timing.accel_time_a,
            timing.accel_time_b,
            times.len()
        );

        let a = profile(self.a.displacement, self.a.start, &times, timing.accel_time_a)?;
        let b = profile(self.b.displacement, self.b.start, &times, timing.accel_time_b)?;

        Ok(JointTrace { a, b, times })
    }
}

/// Plan a synchronized two-axis move.
///
/// Returns one trace per axis and the shared sample times. Displacements in
/// each trace are relative to that axis's start position.
///
/// # Errors
///
/// `InvalidParameter` for a non-positive or non-finite `interval`, non-finite
/// positions, or non-positive limits on an axis that has to move.
#[allow(clippy::too_many_arguments)]
pub fn joint_interpolation(
    displacement_a: f64,
    start_a: f64,
    displacement_b: f64,
    start_b: f64,
    interval: f64,
    accel_limit_a: f64,
    velo_limit_a: f64,
    accel_limit_b: f64,
    velo_limit_b: f64,
) -> Result<JointTrace, ProfileError> {
    JointRequest {
        a: AxisMove {
            displacement: displacement_a,
            start: start_a,
            velocity_limit: velo_limit_a,
            acceleration_limit: accel_limit_a,
        },
        b: AxisMove {
            displacement: displacement_b,
            start: start_b,
            velocity_limit: velo_limit_b,
            acceleration_limit: accel_limit_b,
        },
        interval,
    }
    .interpolate()
}
