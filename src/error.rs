//! Error types for motion-profile library.
//!
//! Provides unified error handling across configuration, profile computation, and playback.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all motion-profile operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Profile or joint interpolation error
    Profile(ProfileError),
    /// Periodic playback error
    Playback(PlaybackError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Axis name not found in configuration
    AxisNotFound(heapless::String<32>),
    /// Move name not found in configuration
    MoveNotFound(heapless::String<32>),
    /// Invalid velocity limit (must be finite and > 0)
    InvalidVelocityLimit(f64),
    /// Invalid acceleration limit (must be finite and > 0)
    InvalidAccelerationLimit(f64),
    /// Invalid soft limits (min must be < max)
    InvalidSoftLimits {
        /// Minimum limit value
        min: f64,
        /// Maximum limit value
        max: f64,
    },
    /// Invalid move duration (must be finite and > 0)
    InvalidDuration(f64),
    /// Invalid sample step count (must be >= 1)
    InvalidSteps(u32),
    /// Invalid acceleration fraction (must be in (0, 0.5])
    InvalidAccelFraction(f64),
    /// Invalid sampling interval (must be finite and > 0)
    InvalidInterval(f64),
    /// Move endpoint lies outside an axis's soft limits
    TargetExceedsLimits {
        /// Requested endpoint
        target: f64,
        /// Axis minimum
        min: f64,
        /// Axis maximum
        max: f64,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Profile computation errors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProfileError {
    /// An input was rejected before computation.
    InvalidParameter(InvalidParameter),
    /// Acceleration and deceleration phases would overlap (`2·Ta > Tm`).
    InfeasibleProfile {
        /// Requested acceleration-phase duration
        accel_time: f64,
        /// Total move duration implied by the sample grid
        total_time: f64,
    },
}

/// The specific input that made a profile request invalid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvalidParameter {
    /// Acceleration-phase duration is zero, negative, or not finite.
    AccelTime(f64),
    /// Time sequence has no samples.
    EmptyTimes,
    /// Time sequence does not begin at zero.
    NonZeroStart(f64),
    /// Time sequence is not strictly increasing at this index.
    NonMonotonicTimes {
        /// Index of the first offending sample
        index: usize,
    },
    /// Time sequence spans no time (single sample at zero).
    ZeroDuration,
    /// A named input is NaN or infinite.
    NonFinite(&'static str),
    /// Sampling interval is not positive, not finite, or yields too many samples.
    Interval(f64),
    /// A kinematic limit of a moving axis is not positive or not finite.
    Limit {
        /// Which limit was rejected
        name: &'static str,
        /// Rejected value
        value: f64,
    },
    /// A required builder field was never set.
    Missing(&'static str),
}

/// Periodic playback errors.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackError {
    /// The background thread could not be spawned
    SpawnFailed(heapless::String<64>),
    /// The periodic callback panicked
    Panicked,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Profile(e) => write!(f, "Profile error: {}", e),
            Error::Playback(e) => write!(f, "Playback error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::AxisNotFound(name) => write!(f, "Axis '{}' not found", name),
            ConfigError::MoveNotFound(name) => write!(f, "Move '{}' not found", name),
            ConfigError::InvalidVelocityLimit(v) => {
                write!(f, "Invalid velocity limit: {}. Must be > 0", v)
            }
            ConfigError::InvalidAccelerationLimit(v) => {
                write!(f, "Invalid acceleration limit: {}. Must be > 0", v)
            }
            ConfigError::InvalidSoftLimits { min, max } => {
                write!(f, "Invalid soft limits: min ({}) must be < max ({})", min, max)
            }
            ConfigError::InvalidDuration(v) => write!(f, "Invalid duration: {}s. Must be > 0", v),
            ConfigError::InvalidSteps(v) => write!(f, "Invalid step count: {}. Must be >= 1", v),
            ConfigError::InvalidAccelFraction(v) => {
                write!(f, "Invalid acceleration fraction: {}. Must be in (0, 0.5]", v)
            }
            ConfigError::InvalidInterval(v) => write!(f, "Invalid interval: {}s. Must be > 0", v),
            ConfigError::TargetExceedsLimits { target, min, max } => {
                write!(f, "Target position {} exceeds limits [{}, {}]", target, min, max)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::InvalidParameter(p) => write!(f, "Invalid parameter: {}", p),
            ProfileError::InfeasibleProfile {
                accel_time,
                total_time,
            } => write!(
                f,
                "Acceleration time {} too long for total time {} (phases overlap)",
                accel_time, total_time
            ),
        }
    }
}

impl fmt::Display for InvalidParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidParameter::AccelTime(v) => {
                write!(f, "acceleration time {} must be finite and > 0", v)
            }
            InvalidParameter::EmptyTimes => write!(f, "time sequence is empty"),
            InvalidParameter::NonZeroStart(t) => {
                write!(f, "time sequence starts at {} instead of 0", t)
            }
            InvalidParameter::NonMonotonicTimes { index } => {
                write!(f, "time sequence is not increasing at index {}", index)
            }
            InvalidParameter::ZeroDuration => write!(f, "time sequence spans zero duration"),
            InvalidParameter::NonFinite(name) => write!(f, "{} is not finite", name),
            InvalidParameter::Interval(v) => write!(f, "sampling interval {} is unusable", v),
            InvalidParameter::Limit { name, value } => {
                write!(f, "{} {} must be finite and > 0", name, value)
            }
            InvalidParameter::Missing(field) => write!(f, "{} not specified", field),
        }
    }
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::SpawnFailed(msg) => write!(f, "Failed to spawn task: {}", msg),
            PlaybackError::Panicked => write!(f, "Periodic task panicked"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<ProfileError> for Error {
    fn from(e: ProfileError) -> Self {
        Error::Profile(e)
    }
}

impl From<InvalidParameter> for ProfileError {
    fn from(e: InvalidParameter) -> Self {
        ProfileError::InvalidParameter(e)
    }
}

impl From<InvalidParameter> for Error {
    fn from(e: InvalidParameter) -> Self {
        Error::Profile(ProfileError::InvalidParameter(e))
    }
}

impl From<PlaybackError> for Error {
    fn from(e: PlaybackError) -> Self {
        Error::Playback(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for ProfileError {}

#[cfg(feature = "std")]
impl std::error::Error for PlaybackError {}
