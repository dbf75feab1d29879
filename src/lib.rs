//! # motion-profile
//!
//! Cosine-blended trapezoidal motion profiles and synchronized two-axis joint
//! interpolation, with TOML-described axes and moves.
//!
//! ## Features
//!
//! - **Smooth profiles**: Acceleration ramps are cosine-shaped, so velocity
//!   is continuous and acceleration passes smoothly through the phase
//!   boundaries (it still steps at the start and end of the move)
//! - **Joint interpolation**: Two axes finish together on one shared time grid
//!   while each stays within its velocity and acceleration limits
//! - **Configuration-driven**: Define axes and named moves in TOML files
//! - **no_std compatible**: Core library needs only an allocator
//! - **embedded-hal 1.0**: Trace playback paced by any `DelayNs` provider
//!
//! ## Quick Start
//!
//! ```rust
//! use motion_profile::{joint_interpolation, profile};
//!
//! // Single axis: 20 units in 10 s with 2.5 s ramps, starting at -10
//! let times: Vec<f64> = (0..=10).map(f64::from).collect();
//! let trace = profile(20.0, -10.0, &times, 2.5)?;
//! assert!((trace.final_position() - 10.0).abs() < 1e-9);
//!
//! // Two axes sharing one grid sampled every 50 ms
//! let joint = joint_interpolation(100.0, 0.0, 90.0, 0.0, 0.05, 200.0, 100.0, 180.0, 90.0)?;
//! assert_eq!(joint.a.len(), joint.b.len());
//! # Ok::<(), motion_profile::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing, and threaded playback
//! - `defmt`: Enables defmt formatting for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

extern crate alloc;

// Core modules
pub mod config;
pub mod error;
pub mod kinematics;
pub mod motion;
pub mod playback;
pub mod system;

// Re-exports for ergonomic API
pub use config::{validate_config, AxisConfig, JointMove, ProfileMove, SystemConfig};
pub use error::{Error, InvalidParameter, ProfileError, Result};
pub use motion::{
    check_trace, joint_interpolation, profile, CosineProfile, JointMoveBuilder, JointRequest,
    JointTrace, MotionPhase, MotionTrace,
};
pub use playback::{play_blocking, TracePlayer};
pub use system::MotionSystem;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Degrees, Seconds};
