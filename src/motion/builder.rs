//! Builder for programmatic joint move creation.

use crate::error::{InvalidParameter, ProfileError};

use super::joint::{AxisMove, JointRequest};
use super::trace::JointTrace;

/// Builder for creating two-axis joint moves.
#[derive(Debug, Clone, Default)]
pub struct JointMoveBuilder {
    a: Option<AxisMove>,
    b: Option<AxisMove>,
    interval: Option<f64>,
}

impl JointMoveBuilder {
    /// Create a new joint move builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first axis.
    pub fn axis_a(mut self, axis: AxisMove) -> Self {
        self.a = Some(axis);
        self
    }

    /// Set the second axis.
    pub fn axis_b(mut self, axis: AxisMove) -> Self {
        self.b = Some(axis);
        self
    }

    /// Set the first axis from start/end positions and limits.
    pub fn move_a(self, start: f64, end: f64, velocity_limit: f64, acceleration_limit: f64) -> Self {
        self.axis_a(AxisMove::between(start, end, velocity_limit, acceleration_limit))
    }

    /// Set the second axis from start/end positions and limits.
    pub fn move_b(self, start: f64, end: f64, velocity_limit: f64, acceleration_limit: f64) -> Self {
        self.axis_b(AxisMove::between(start, end, velocity_limit, acceleration_limit))
    }

    /// Set the sampling interval in seconds.
    pub fn interval(mut self, interval: f64) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Build the joint request.
    ///
    /// # Errors
    ///
    /// Returns an error if an axis or the interval is missing.
    pub fn build(self) -> Result<JointRequest, ProfileError> {
        let a = self.a.ok_or(InvalidParameter::Missing("axis a"))?;
        let b = self.b.ok_or(InvalidParameter::Missing("axis b"))?;
        let interval = self.interval.ok_or(InvalidParameter::Missing("interval"))?;

        Ok(JointRequest { a, b, interval })
    }

    /// Build the request and plan it.
    pub fn plan(self) -> Result<JointTrace, ProfileError> {
        self.build()?.interpolate()
    }
}
