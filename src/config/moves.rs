//! Move configuration from TOML.

use alloc::vec::Vec;

use heapless::String;
use serde::Deserialize;

use crate::error::ProfileError;
use crate::motion::grid::uniform_grid;

use super::units::Seconds;

/// A named single-axis move previewed on an evenly spaced grid.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileMove {
    /// Axis whose limits the move is checked against (optional).
    #[serde(default)]
    pub axis: Option<String<32>>,

    /// Start position.
    pub start: f64,

    /// End position.
    pub end: f64,

    /// Total move duration.
    #[serde(rename = "duration_secs")]
    pub duration: Seconds,

    /// Number of intervals the duration is split into.
    #[serde(default = "default_steps")]
    pub steps: u32,

    /// Ramp time as a fraction of the duration (0 < f <= 0.5).
    #[serde(default = "default_accel_fraction")]
    pub accel_fraction: f64,
}

fn default_steps() -> u32 {
    100
}

fn default_accel_fraction() -> f64 {
    0.5
}

impl ProfileMove {
    /// Net displacement of the move.
    #[inline]
    pub fn displacement(&self) -> f64 {
        self.end - self.start
    }

    /// Acceleration-phase duration `Ta`.
    #[inline]
    pub fn accel_time(&self) -> f64 {
        self.duration.0 * self.accel_fraction
    }

    /// Sample times of the preview grid.
    pub fn times(&self) -> Result<Vec<f64>, ProfileError> {
        Ok(uniform_grid(self.duration.0, self.steps)?)
    }
}

/// A named two-axis move between configured axes.
#[derive(Debug, Clone, Deserialize)]
pub struct JointMove {
    /// First axis name.
    pub axis_a: String<32>,

    /// Second axis name.
    pub axis_b: String<32>,

    /// Start position of the first axis.
    pub start_a: f64,

    /// End position of the first axis.
    pub end_a: f64,

    /// Start position of the second axis.
    pub start_b: f64,

    /// End position of the second axis.
    pub end_b: f64,

    /// Sampling interval of the shared grid.
    #[serde(rename = "interval_secs")]
    pub interval: Seconds,
}
