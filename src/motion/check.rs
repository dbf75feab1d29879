//! Limit checking of computed traces.
//!
//! Compares a trace's end point and peaks against what the caller asked for
//! and reports every violation instead of stopping at the first.

use core::fmt;

use heapless::Vec;
use libm::fabs;

use crate::config::SoftLimits;

use super::trace::MotionTrace;

/// Default tolerance between the requested end position and the trace's final position.
pub const DEFAULT_POSITION_TOLERANCE: f64 = 0.01;

/// Relative slack allowed on velocity/acceleration peaks before flagging them.
const PEAK_SLACK: f64 = 1e-9;

/// What a trace is checked against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceLimits {
    /// Expected absolute end position.
    pub target: f64,
    /// Allowed deviation from `target` at the last sample.
    pub position_tolerance: f64,
    /// Velocity magnitude limit, if any.
    pub velocity: Option<f64>,
    /// Acceleration magnitude limit, if any.
    pub acceleration: Option<f64>,
}

impl TraceLimits {
    /// Only check that the trace ends at `target`.
    pub fn ending_at(target: f64) -> Self {
        Self {
            target,
            position_tolerance: DEFAULT_POSITION_TOLERANCE,
            velocity: None,
            acceleration: None,
        }
    }

    /// Also check peak velocity and acceleration.
    pub fn with_kinematics(mut self, velocity: f64, acceleration: f64) -> Self {
        self.velocity = Some(velocity);
        self.acceleration = Some(acceleration);
        self
    }
}

/// A single limit violation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Violation {
    /// The trace does not end at the requested position.
    FinalPosition {
        /// Requested end position
        expected: f64,
        /// Position reached
        actual: f64,
    },
    /// Peak velocity magnitude exceeds the limit.
    PeakVelocity {
        /// Peak reached
        peak: f64,
        /// Limit
        limit: f64,
    },
    /// Peak acceleration magnitude exceeds the limit.
    PeakAcceleration {
        /// Peak reached
        peak: f64,
        /// Limit
        limit: f64,
    },
    /// The trace leaves the axis's soft limits.
    OutOfRange {
        /// Offending position
        position: f64,
        /// Minimum allowed
        min: f64,
        /// Maximum allowed
        max: f64,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::FinalPosition { expected, actual } => {
                write!(f, "final position {} is not at specified end {}", actual, expected)
            }
            Violation::PeakVelocity { peak, limit } => {
                write!(f, "peak velocity {} is above limit {}", peak, limit)
            }
            Violation::PeakAcceleration { peak, limit } => {
                write!(f, "peak acceleration {} is above limit {}", peak, limit)
            }
            Violation::OutOfRange { position, min, max } => {
                write!(f, "position {} leaves limits [{}, {}]", position, min, max)
            }
        }
    }
}

/// Result of checking one trace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LimitReport {
    violations: Vec<Violation, 4>,
}

impl LimitReport {
    /// Check if no limit was violated.
    #[inline]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// All violations found.
    #[inline]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    fn record(&mut self, violation: Violation) {
        log::warn!("Check profile: {}", violation);
        // One slot per violation kind, so this cannot overflow.
        let _ = self.violations.push(violation);
    }
}

/// Check `trace` against `limits` and, if given, the axis's soft limits.
pub fn check_trace(
    trace: &MotionTrace,
    limits: &TraceLimits,
    soft_limits: Option<&SoftLimits>,
) -> LimitReport {
    let mut report = LimitReport::default();

    let actual = trace.final_position();
    if fabs(actual - limits.target) > limits.position_tolerance {
        report.record(Violation::FinalPosition {
            expected: limits.target,
            actual,
        });
    }

    if let Some(limit) = limits.velocity {
        let peak = trace.peak_velocity();
        if exceeds(peak, limit) {
            report.record(Violation::PeakVelocity { peak, limit });
        }
    }

    if let Some(limit) = limits.acceleration {
        let peak = trace.peak_acceleration();
        if exceeds(peak, limit) {
            report.record(Violation::PeakAcceleration { peak, limit });
        }
    }

    if let Some(soft) = soft_limits {
        if let Some(position) = trace.positions().find(|p| !soft.contains(*p)) {
            report.record(Violation::OutOfRange {
                position,
                min: soft.min,
                max: soft.max,
            });
        }
    }

    if report.passed() {
        log::debug!("Profile passed: final position {}", actual);
    }
    report
}

fn exceeds(peak: f64, limit: f64) -> bool {
    peak > limit + fabs(limit) * PEAK_SLACK
}
