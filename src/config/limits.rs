//! Position ranges an axis is allowed to travel.
//!
//! Move endpoints are checked against the range before planning, and computed
//! traces are checked sample by sample afterwards.

use serde::Deserialize;

/// What happens to a move endpoint outside an axis's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitPolicy {
    /// Refuse to plan the move.
    #[default]
    Reject,
    /// Move the endpoint to the nearer end of the range.
    Clamp,
}

/// Absolute position range of one axis, from `[axes.<id>.limits]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SoftLimits {
    /// Lowest reachable position.
    pub min: f64,

    /// Highest reachable position.
    pub max: f64,

    /// Handling of endpoints outside `[min, max]` (reject by default).
    #[serde(default)]
    pub policy: LimitPolicy,
}

impl SoftLimits {
    /// Range `[min, max]` with the given endpoint policy.
    pub fn new(min: f64, max: f64, policy: LimitPolicy) -> Self {
        Self { min, max, policy }
    }

    /// Check that the range is non-empty and ordered (`min < max`).
    pub fn is_valid(&self) -> bool {
        self.min < self.max
    }

    /// Check if `position` lies in `[min, max]`, ends included.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.min && position <= self.max
    }

    /// Resolve a move endpoint against the range.
    ///
    /// Endpoints inside the range pass through unchanged. Outside it, the
    /// clamp policy yields the nearer bound and the reject policy `None`.
    pub fn apply(&self, target: f64) -> Option<f64> {
        match self.policy {
            _ if self.contains(target) => Some(target),
            LimitPolicy::Reject => None,
            LimitPolicy::Clamp => Some(target.max(self.min).min(self.max)),
        }
    }
}
