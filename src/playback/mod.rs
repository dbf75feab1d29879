//! Playback module for motion-profile.
//!
//! Consumes precomputed traces one frame at a time, either blocking on a
//! `DelayNs` provider or (with `std`) from a periodic background thread.

#[cfg(feature = "std")]
mod periodic;
mod player;

#[cfg(feature = "std")]
pub use periodic::{spawn_playback, Pacing, PeriodicTask, TaskStats};
pub use player::{play_blocking, AxisFrame, Frames, JointFrame, TracePlayer};
