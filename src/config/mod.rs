//! Configuration module for motion-profile.
//!
//! Provides types for loading and validating axis and move configurations
//! from TOML files (with `std` feature) or pre-parsed data.

mod axis;
mod limits;
mod moves;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use axis::AxisConfig;
pub use limits::{LimitPolicy, SoftLimits};
pub use moves::{JointMove, ProfileMove};
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Degrees, Seconds};
