//! Unit types for physical quantities.
//!
//! Keeps durations and angles distinct from bare positions in configuration
//! and kinematics code.

use libm::round;
use serde::Deserialize;

/// Angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    /// Create a new Degrees value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to radians.
    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Create from radians.
    #[inline]
    pub fn from_radians(radians: f64) -> Self {
        Self(radians.to_degrees())
    }
}

/// Duration in seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Seconds(pub f64);

impl Seconds {
    /// Create a new Seconds value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Check if the duration is finite and strictly positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Nearest whole microseconds, saturating at `u32::MAX`.
    pub fn as_micros(self) -> u32 {
        let micros = round(self.0 * 1_000_000.0);
        if micros <= 0.0 {
            0
        } else if micros >= u32::MAX as f64 {
            u32::MAX
        } else {
            micros as u32
        }
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Degrees.
    fn degrees(self) -> Degrees;
    /// Convert to Seconds.
    fn seconds(self) -> Seconds;
}

impl UnitExt for f64 {
    #[inline]
    fn degrees(self) -> Degrees {
        Degrees(self)
    }

    #[inline]
    fn seconds(self) -> Seconds {
        Seconds(self)
    }
}
