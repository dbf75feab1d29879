//! Sample-time grids.
//!
//! Builds the time sequences that profiles are evaluated on and validates
//! caller-supplied ones.

use alloc::vec::Vec;

use libm::floor;

use crate::error::InvalidParameter;

/// Upper bound on the number of samples a generated grid may hold.
pub const MAX_GRID_SAMPLES: usize = 1 << 20;

/// Evenly divide `duration` into `steps` intervals.
///
/// Returns `steps + 1` samples starting at 0. The last sample is exactly
/// `duration` so that it can serve as the profile's total move time.
pub fn uniform_grid(duration: f64, steps: u32) -> Result<Vec<f64>, InvalidParameter> {
    if !duration.is_finite() || duration <= 0.0 {
        return Err(InvalidParameter::ZeroDuration);
    }
    if steps == 0 {
        return Err(InvalidParameter::Interval(duration));
    }
    if steps as usize >= MAX_GRID_SAMPLES {
        return Err(InvalidParameter::Interval(duration / steps as f64));
    }

    let mut times: Vec<f64> = (0..=steps)
        .map(|k| duration * k as f64 / steps as f64)
        .collect();
    if let Some(last) = times.last_mut() {
        *last = duration;
    }
    Ok(times)
}

/// Sample `[0, duration]` every `interval` seconds.
///
/// The grid is `[0, interval, 2·interval, …]` and always ends exactly at
/// `duration`; when `interval` does not divide `duration` evenly the final
/// sample is shortened. A zero `duration` yields the single sample `[0]`.
pub fn sampled_grid(duration: f64, interval: f64) -> Result<Vec<f64>, InvalidParameter> {
    if !interval.is_finite() || interval <= 0.0 {
        return Err(InvalidParameter::Interval(interval));
    }
    if !duration.is_finite() || duration < 0.0 {
        return Err(InvalidParameter::NonFinite("duration"));
    }
    if duration == 0.0 {
        return Ok(alloc::vec![0.0]);
    }

    let whole = floor(duration / interval);
    if whole >= MAX_GRID_SAMPLES as f64 {
        return Err(InvalidParameter::Interval(interval));
    }
    let whole = whole as usize;

    let mut times: Vec<f64> = (0..=whole).map(|k| k as f64 * interval).collect();
    let remainder = duration - whole as f64 * interval;
    if remainder > interval * 1e-9 || whole == 0 {
        times.push(duration);
    } else if let Some(last) = times.last_mut() {
        // Absorb rounding so the grid ends on `duration` exactly.
        *last = duration;
    }
    Ok(times)
}

/// Check that `times` is usable as a profile grid and return its total duration.
///
/// The grid must be non-empty, finite, start at 0, increase strictly, and
/// span a non-zero duration.
pub fn validate_times(times: &[f64]) -> Result<f64, InvalidParameter> {
    let first = *times.first().ok_or(InvalidParameter::EmptyTimes)?;
    if !first.is_finite() {
        return Err(InvalidParameter::NonFinite("times"));
    }
    if first != 0.0 {
        return Err(InvalidParameter::NonZeroStart(first));
    }

    for (index, pair) in times.windows(2).enumerate() {
        if !pair[1].is_finite() {
            return Err(InvalidParameter::NonFinite("times"));
        }
        if pair[1] <= pair[0] {
            return Err(InvalidParameter::NonMonotonicTimes { index: index + 1 });
        }
    }

    // Strictly increasing, so the last sample is the maximum.
    let total = times[times.len() - 1];
    if total <= 0.0 {
        return Err(InvalidParameter::ZeroDuration);
    }
    Ok(total)
}
