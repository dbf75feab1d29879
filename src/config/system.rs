//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::axis::AxisConfig;
use super::moves::{JointMove, ProfileMove};

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemConfig {
    /// Named axis configurations.
    pub axes: FnvIndexMap<String<32>, AxisConfig, 8>,

    /// Named single-axis moves.
    #[serde(default)]
    pub moves: FnvIndexMap<String<32>, ProfileMove, 16>,

    /// Named two-axis moves.
    #[serde(default)]
    pub joint_moves: FnvIndexMap<String<32>, JointMove, 16>,
}

impl SystemConfig {
    /// Get an axis configuration by name.
    pub fn axis(&self, name: &str) -> Option<&AxisConfig> {
        self.axes
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Get a single-axis move by name.
    pub fn profile_move(&self, name: &str) -> Option<&ProfileMove> {
        self.moves
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Get a joint move by name.
    pub fn joint_move(&self, name: &str) -> Option<&JointMove> {
        self.joint_moves
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all axis names.
    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.axes.keys().map(|s| s.as_str())
    }

    /// List all single-axis move names.
    pub fn move_names(&self) -> impl Iterator<Item = &str> {
        self.moves.keys().map(|s| s.as_str())
    }

    /// List all joint move names.
    pub fn joint_move_names(&self) -> impl Iterator<Item = &str> {
        self.joint_moves.keys().map(|s| s.as_str())
    }
}
