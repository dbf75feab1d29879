//! Computed motion traces.
//!
//! A trace is the immutable result of evaluating a profile on a time grid.
//! Displacements are stored relative to the move's start position; absolute
//! positions are derived on demand.

use alloc::vec::Vec;

use libm::fabs;

/// One evaluated instant of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionSample {
    /// Sample time in seconds from the start of the move.
    pub time: f64,
    /// Displacement relative to the start position.
    pub displacement: f64,
    /// Velocity.
    pub velocity: f64,
    /// Acceleration.
    pub acceleration: f64,
}

/// A single-axis trace aligned one-to-one with its time grid.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionTrace {
    start: f64,
    times: Vec<f64>,
    displacement: Vec<f64>,
    velocity: Vec<f64>,
    acceleration: Vec<f64>,
}

impl MotionTrace {
    /// Assemble a trace from evaluated samples.
    pub(crate) fn from_samples(start: f64, samples: impl Iterator<Item = MotionSample>) -> Self {
        let (lower, _) = samples.size_hint();
        let mut trace = Self {
            start,
            times: Vec::with_capacity(lower),
            displacement: Vec::with_capacity(lower),
            velocity: Vec::with_capacity(lower),
            acceleration: Vec::with_capacity(lower),
        };
        for sample in samples {
            trace.times.push(sample.time);
            trace.displacement.push(sample.displacement);
            trace.velocity.push(sample.velocity);
            trace.acceleration.push(sample.acceleration);
        }
        trace
    }

    /// A trace that holds `start` for every time in `times`.
    pub fn stationary(start: f64, times: &[f64]) -> Self {
        Self::from_samples(
            start,
            times.iter().map(|&time| MotionSample {
                time,
                ..MotionSample::default()
            }),
        )
    }

    /// Start position of the move.
    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Check if the trace has no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Sample times.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Displacements relative to the start position.
    #[inline]
    pub fn displacement(&self) -> &[f64] {
        &self.displacement
    }

    /// Velocities.
    #[inline]
    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    /// Accelerations.
    #[inline]
    pub fn acceleration(&self) -> &[f64] {
        &self.acceleration
    }

    /// Sample at `index`, if in range.
    pub fn sample(&self, index: usize) -> Option<MotionSample> {
        Some(MotionSample {
            time: *self.times.get(index)?,
            displacement: self.displacement[index],
            velocity: self.velocity[index],
            acceleration: self.acceleration[index],
        })
    }

    /// Iterate over all samples in time order.
    pub fn samples(&self) -> impl Iterator<Item = MotionSample> + '_ {
        (0..self.len()).filter_map(move |i| self.sample(i))
    }

    /// Absolute positions (`start + displacement`).
    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        self.displacement.iter().map(move |d| self.start + d)
    }

    /// Absolute position at `index`, if in range.
    #[inline]
    pub fn position(&self, index: usize) -> Option<f64> {
        self.displacement.get(index).map(|d| self.start + d)
    }

    /// Duration covered by the trace (its last sample time).
    pub fn duration(&self) -> f64 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Displacement reached at the last sample.
    pub fn final_displacement(&self) -> f64 {
        self.displacement.last().copied().unwrap_or(0.0)
    }

    /// Absolute position reached at the last sample.
    pub fn final_position(&self) -> f64 {
        self.start + self.final_displacement()
    }

    /// Largest velocity magnitude in the trace.
    pub fn peak_velocity(&self) -> f64 {
        peak_magnitude(&self.velocity)
    }

    /// Largest acceleration magnitude in the trace.
    pub fn peak_acceleration(&self) -> f64 {
        peak_magnitude(&self.acceleration)
    }
}

fn peak_magnitude(values: &[f64]) -> f64 {
    values.iter().fold(0.0_f64, |peak, v| peak.max(fabs(*v)))
}

/// Two axis traces evaluated on one shared time grid.
#[derive(Debug, Clone, PartialEq)]
pub struct JointTrace {
    /// Trace of the first axis.
    pub a: MotionTrace,
    /// Trace of the second axis.
    pub b: MotionTrace,
    /// Shared sample times.
    pub times: Vec<f64>,
}

impl JointTrace {
    /// Number of shared samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Check if the trace has no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Shared move duration.
    pub fn duration(&self) -> f64 {
        self.times.last().copied().unwrap_or(0.0)
    }
}
