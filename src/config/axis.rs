//! Axis configuration from TOML.

use heapless::String;
use serde::Deserialize;

use crate::motion::{AxisMove, TraceLimits};

use super::limits::SoftLimits;

/// Kinematic description of one axis.
#[derive(Debug, Clone, Deserialize)]
pub struct AxisConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Largest velocity magnitude the axis may reach.
    pub velocity_limit: f64,

    /// Largest acceleration magnitude the axis may reach.
    pub acceleration_limit: f64,

    /// Optional soft limits on absolute position.
    #[serde(default)]
    pub limits: Option<SoftLimits>,
}

impl AxisConfig {
    /// Resolve a requested endpoint against the soft limits.
    ///
    /// Returns `None` if the endpoint is outside the limits and the policy rejects it.
    pub fn resolve_target(&self, target: f64) -> Option<f64> {
        match self.limits {
            Some(ref limits) => limits.apply(target),
            None => Some(target),
        }
    }

    /// Describe a move of this axis from `start` to `end`.
    pub fn axis_move(&self, start: f64, end: f64) -> AxisMove {
        AxisMove::between(start, end, self.velocity_limit, self.acceleration_limit)
    }

    /// Limits a trace of this axis ending at `target` is checked against.
    pub fn trace_limits(&self, target: f64) -> TraceLimits {
        TraceLimits::ending_at(target).with_kinematics(self.velocity_limit, self.acceleration_limit)
    }
}
