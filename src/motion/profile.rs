//! Single-axis motion profile.
//!
//! Trapezoidal velocity profiles whose ramps are half-cosine blends, so the
//! acceleration rises and falls smoothly instead of stepping. The acceleration
//! and deceleration phases share the duration `Ta`; the cruise phase fills the
//! remaining `Tb = Tm - 2·Ta`.

use core::f64::consts::PI;

use libm::{cos, sin};

use crate::error::{InvalidParameter, ProfileError};

use super::grid::validate_times;
use super::trace::{MotionSample, MotionTrace};

/// Phase of a profile at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionPhase {
    /// Half-cosine ramp up, `0 <= t < Ta`.
    Accelerating,
    /// Constant velocity, `Ta <= t <= Ta + Tb`.
    Cruising,
    /// Mirrored half-cosine ramp down, `Ta + Tb < t <= Tm`.
    Decelerating,
    /// Outside `[0, Tm]`.
    Complete,
}

/// Planned coefficients of a cosine-blended trapezoidal profile.
///
/// Evaluation is a pure function of these coefficients, so the same plan
/// always reproduces the same samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CosineProfile {
    displacement: f64,
    accel_time: f64,
    cruise_time: f64,
    total_time: f64,
    peak_acceleration: f64,
    ramp_displacement: f64,
    peak_velocity: f64,
}

impl CosineProfile {
    /// Plan a profile covering `displacement` in `total_time` with ramps of
    /// `accel_time` seconds.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if any input is non-finite, `accel_time <= 0`, or
    ///   `total_time <= 0`.
    /// - `InfeasibleProfile` if `2·accel_time > total_time`.
    pub fn new(displacement: f64, total_time: f64, accel_time: f64) -> Result<Self, ProfileError> {
        if !displacement.is_finite() {
            return Err(InvalidParameter::NonFinite("displacement").into());
        }
        if !accel_time.is_finite() || accel_time <= 0.0 {
            return Err(InvalidParameter::AccelTime(accel_time).into());
        }
        if !total_time.is_finite() {
            return Err(InvalidParameter::NonFinite("total time").into());
        }
        if total_time <= 0.0 {
            return Err(InvalidParameter::ZeroDuration.into());
        }

        let ta = accel_time;
        let tm = total_time;
        let tb = tm - 2.0 * ta;
        if tb < 0.0 {
            return Err(ProfileError::InfeasibleProfile {
                accel_time: ta,
                total_time: tm,
            });
        }

        let am = displacement * PI * PI / (8.0 * ta * ta + 2.0 * ta * (tm - ta) * PI);
        let da = displacement / 2.0 - am * 2.0 * ta * tb / (2.0 * PI);
        let vm = am * 2.0 * ta / PI;

        Ok(Self {
            displacement,
            accel_time: ta,
            cruise_time: tb,
            total_time: tm,
            peak_acceleration: am,
            ramp_displacement: da,
            peak_velocity: vm,
        })
    }

    /// Net displacement of the move.
    #[inline]
    pub fn displacement(&self) -> f64 {
        self.displacement
    }

    /// Acceleration (and deceleration) phase duration `Ta`.
    #[inline]
    pub fn accel_time(&self) -> f64 {
        self.accel_time
    }

    /// Cruise phase duration `Tb`.
    #[inline]
    pub fn cruise_time(&self) -> f64 {
        self.cruise_time
    }

    /// Total move duration `Tm`.
    #[inline]
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Signed peak acceleration `am`.
    #[inline]
    pub fn peak_acceleration(&self) -> f64 {
        self.peak_acceleration
    }

    /// Signed cruise velocity `am·2Ta/π`.
    #[inline]
    pub fn peak_velocity(&self) -> f64 {
        self.peak_velocity
    }

    /// Displacement covered by the acceleration phase `Da`.
    #[inline]
    pub fn ramp_displacement(&self) -> f64 {
        self.ramp_displacement
    }

    /// Check if the profile has no cruise phase.
    #[inline]
    pub fn is_triangular(&self) -> bool {
        self.cruise_time == 0.0
    }

    /// Get the phase at time `t`.
    pub fn phase_at(&self, t: f64) -> MotionPhase {
        let ta = self.accel_time;
        let tb = self.cruise_time;
        if !(0.0..=self.total_time).contains(&t) {
            MotionPhase::Complete
        } else if t < ta {
            MotionPhase::Accelerating
        } else if t <= ta + tb {
            MotionPhase::Cruising
        } else {
            MotionPhase::Decelerating
        }
    }

    /// Evaluate the profile at time `t`.
    ///
    /// Instants outside `[0, Tm]` yield an all-zero sample.
    pub fn sample(&self, t: f64) -> MotionSample {
        let ta = self.accel_time;
        let tb = self.cruise_time;
        let am = self.peak_acceleration;
        let da = self.ramp_displacement;
        let vm = self.peak_velocity;

        let (displacement, velocity, acceleration) = match self.phase_at(t) {
            MotionPhase::Accelerating => {
                let theta = PI * t / (2.0 * ta);
                (da - da * cos(theta), vm * sin(theta), am * cos(theta))
            }
            MotionPhase::Cruising => (vm * t - vm * ta + da, vm, 0.0),
            MotionPhase::Decelerating => {
                let theta = PI * (t - tb) / (2.0 * ta);
                (-da * cos(theta) + vm * tb + da, vm * sin(theta), am * cos(theta))
            }
            MotionPhase::Complete => (0.0, 0.0, 0.0),
        };

        MotionSample {
            time: t,
            displacement,
            velocity,
            acceleration,
        }
    }

    /// Evaluate the profile on every instant of `times`.
    pub fn evaluate(&self, start: f64, times: &[f64]) -> MotionTrace {
        MotionTrace::from_samples(start, times.iter().map(|&t| self.sample(t)))
    }
}

/// A single-axis profile request.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionRequest<'a> {
    /// Target minus start.
    pub displacement: f64,
    /// Initial position.
    pub start: f64,
    /// Sample instants; the last one is the total move time.
    pub times: &'a [f64],
    /// Acceleration-phase duration.
    pub accel_time: f64,
}

impl MotionRequest<'_> {
    /// Validate and evaluate the request.
    pub fn evaluate(&self) -> Result<MotionTrace, ProfileError> {
        profile(self.displacement, self.start, self.times, self.accel_time)
    }
}

/// Compute a cosine-blended trapezoidal profile on a time grid.
///
/// The total move time `Tm` is the last entry of `times`. Displacements in the
/// returned trace are relative to `start` (the first is always 0); use
/// [`MotionTrace::positions`] for absolute positions.
///
/// # Errors
///
/// - `InvalidParameter` for an empty, non-finite, non-increasing, or
///   zero-length time grid, a grid not starting at 0, a non-finite
///   `displacement` or `start`, or `accel_time` that is not finite and positive.
/// - `InfeasibleProfile` if `2·accel_time` exceeds the grid's duration.
///
/// # Example
///
/// ```rust
/// use motion_profile::motion::profile;
///
/// let times: Vec<f64> = (0..=10).map(f64::from).collect();
/// let trace = profile(20.0, -10.0, &times, 2.5)?;
/// assert_eq!(trace.displacement()[0], 0.0);
/// assert!((trace.final_position() - 10.0).abs() < 0.01);
/// # Ok::<(), motion_profile::error::ProfileError>(())
/// ```
pub fn profile(
    displacement: f64,
    start: f64,
    times: &[f64],
    accel_time: f64,
) -> Result<MotionTrace, ProfileError> {
    if !start.is_finite() {
        return Err(InvalidParameter::NonFinite("start").into());
    }
    if !accel_time.is_finite() || accel_time <= 0.0 {
        return Err(InvalidParameter::AccelTime(accel_time).into());
    }
    let total_time = validate_times(times)?;
    let plan = CosineProfile::new(displacement, total_time, accel_time)?;

    log::debug!(
        "profile: displacement={} Tm={} Ta={} am={} v_peak={}",
        displacement,
        total_time,
        accel_time,
        plan.peak_acceleration(),
        plan.peak_velocity()
    );

    Ok(plan.evaluate(start, times))
}
