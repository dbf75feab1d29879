//! Frame-by-frame playback of a computed trace.

use alloc::sync::Arc;

use embedded_hal::delay::DelayNs;

use crate::config::units::Seconds;
use crate::motion::{JointTrace, MotionTrace};

/// Absolute position of one axis at one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisFrame {
    /// Sample time.
    pub time: f64,
    /// Absolute position.
    pub position: f64,
}

/// Absolute positions of both axes at one shared sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointFrame {
    /// Sample time.
    pub time: f64,
    /// Absolute position of the first axis.
    pub position_a: f64,
    /// Absolute position of the second axis.
    pub position_b: f64,
}

/// A read-only sequence of frames that can be played back.
pub trait Frames {
    /// Frame type produced per sample.
    type Frame: Copy;

    /// Number of frames.
    fn frame_count(&self) -> usize;

    /// Frame at `index`, if in range.
    fn frame(&self, index: usize) -> Option<Self::Frame>;
}

impl Frames for MotionTrace {
    type Frame = AxisFrame;

    fn frame_count(&self) -> usize {
        self.len()
    }

    fn frame(&self, index: usize) -> Option<AxisFrame> {
        Some(AxisFrame {
            time: *self.times().get(index)?,
            position: self.position(index)?,
        })
    }
}

impl Frames for JointTrace {
    type Frame = JointFrame;

    fn frame_count(&self) -> usize {
        self.len()
    }

    fn frame(&self, index: usize) -> Option<JointFrame> {
        Some(JointFrame {
            time: *self.times.get(index)?,
            position_a: self.a.position(index)?,
            position_b: self.b.position(index)?,
        })
    }
}

impl<F: Frames + ?Sized> Frames for &F {
    type Frame = F::Frame;

    fn frame_count(&self) -> usize {
        (**self).frame_count()
    }

    fn frame(&self, index: usize) -> Option<F::Frame> {
        (**self).frame(index)
    }
}

impl<F: Frames + ?Sized> Frames for Arc<F> {
    type Frame = F::Frame;

    fn frame_count(&self) -> usize {
        (**self).frame_count()
    }

    fn frame(&self, index: usize) -> Option<F::Frame> {
        (**self).frame(index)
    }
}

/// Cursor over a trace, advanced one frame per tick.
#[derive(Debug, Clone)]
pub struct TracePlayer<T> {
    /// The trace being played.
    source: T,

    /// Index of the next frame to emit.
    index: usize,
}

impl<T: Frames> TracePlayer<T> {
    /// Create a new player positioned at the first frame.
    pub fn new(source: T) -> Self {
        Self { source, index: 0 }
    }

    /// Check if every frame has been emitted.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.index >= self.source.frame_count()
    }

    /// Get the index of the next frame.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get frames remaining.
    #[inline]
    pub fn frames_remaining(&self) -> usize {
        self.source.frame_count().saturating_sub(self.index)
    }

    /// Get the trace being played.
    #[inline]
    pub fn source(&self) -> &T {
        &self.source
    }

    /// Peek at the next frame without consuming it.
    #[inline]
    pub fn current(&self) -> Option<T::Frame> {
        self.source.frame(self.index)
    }

    /// Emit the next frame.
    ///
    /// Returns `None` once the trace is exhausted.
    pub fn advance(&mut self) -> Option<T::Frame> {
        let frame = self.source.frame(self.index)?;
        self.index += 1;
        Some(frame)
    }

    /// Reset the player to the beginning.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Get progress as a fraction (0.0 to 1.0).
    #[inline]
    pub fn progress(&self) -> f64 {
        let total = self.source.frame_count();
        if total == 0 {
            1.0
        } else {
            self.index.min(total) as f64 / total as f64
        }
    }
}

/// Play every remaining frame, waiting `interval` between frames.
///
/// `on_frame` receives each frame as it is emitted. Returns the number of
/// frames played.
pub fn play_blocking<T, D, F>(
    player: &mut TracePlayer<T>,
    delay: &mut D,
    interval: Seconds,
    mut on_frame: F,
) -> usize
where
    T: Frames,
    D: DelayNs,
    F: FnMut(T::Frame),
{
    let period_us = interval.as_micros();
    let mut played = 0;

    while let Some(frame) = player.advance() {
        on_frame(frame);
        played += 1;
        log::trace!("played frame {}", played);
        if !player.is_complete() {
            delay.delay_us(period_us);
        }
    }

    played
}
