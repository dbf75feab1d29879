//! Motion module for motion-profile.
//!
//! Provides single-axis profile evaluation, two-axis joint interpolation,
//! and checks of the resulting traces.

mod builder;
mod check;
pub mod grid;
mod joint;
mod profile;
mod trace;

pub use builder::JointMoveBuilder;
pub use check::{check_trace, LimitReport, TraceLimits, Violation, DEFAULT_POSITION_TOLERANCE};
pub use joint::{joint_interpolation, AxisMove, JointRequest, JointTiming};
pub use profile::{profile, CosineProfile, MotionPhase, MotionRequest};
pub use trace::{JointTrace, MotionSample, MotionTrace};
