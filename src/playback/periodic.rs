//! Periodic background task (std only).
//!
//! Invokes a callback at a fixed period on its own thread until the callback
//! asks to stop or [`PeriodicTask::stop`] is called. The wait between ticks
//! is interruptible, so stopping never has to sit out a full period.

use std::ops::ControlFlow;
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::error::{Error, PlaybackError, Result};

use super::player::{Frames, TracePlayer};

/// Pacing of a periodic task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pacing {
    /// Ticks are scheduled against absolute deadlines, so time spent in the
    /// callback is subtracted from the next wait.
    #[default]
    Strict,
    /// A full period is waited after every callback.
    Relaxed,
}

/// Statistics reported when a periodic task finishes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TaskStats {
    /// Number of callback invocations.
    pub ticks: u64,
    /// Mean time left before each deadline after the callback ran, in seconds.
    /// Negative values mean the callback overran its period.
    pub average_slack_secs: f64,
}

/// Stop flag that wakes a sleeping task immediately.
#[derive(Debug, Default)]
struct StopSignal {
    stopped: Mutex<bool>,
    wake: Condvar,
}

impl StopSignal {
    fn stop(&self) {
        let mut stopped = self.stopped.lock().unwrap_or_else(PoisonError::into_inner);
        *stopped = true;
        self.wake.notify_all();
    }

    fn is_stopped(&self) -> bool {
        *self.stopped.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Sleep for `timeout` unless stopped first. Returns `true` if stopped.
    fn wait(&self, timeout: Duration) -> bool {
        let guard = self.stopped.lock().unwrap_or_else(PoisonError::into_inner);
        let (guard, _) = self
            .wake
            .wait_timeout_while(guard, timeout, |stopped| !*stopped)
            .unwrap_or_else(PoisonError::into_inner);
        *guard
    }
}

/// Handle to a running periodic task.
#[derive(Debug)]
pub struct PeriodicTask {
    name: String,
    signal: Arc<StopSignal>,
    handle: JoinHandle<TaskStats>,
}

impl PeriodicTask {
    /// Spawn a task calling `tick` every `period`.
    ///
    /// The first call happens immediately. Returning `ControlFlow::Break`
    /// from `tick` ends the task.
    ///
    /// # Errors
    ///
    /// Returns `PlaybackError::SpawnFailed` if the thread cannot be created.
    pub fn spawn<F>(name: &str, period: Duration, pacing: Pacing, mut tick: F) -> Result<Self>
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        let signal = Arc::new(StopSignal::default());
        let task_signal = Arc::clone(&signal);
        let task_name = name.to_owned();

        let handle = thread::Builder::new()
            .name(name.to_owned())
            .spawn(move || {
                log::debug!("Starting periodic task {}", task_name);
                let mut stats = TaskStats::default();
                let mut total_slack = 0.0;
                let mut deadline = Instant::now();
                let mut wait = Duration::ZERO;

                while !task_signal.wait(wait) {
                    stats.ticks += 1;
                    deadline += period;
                    if tick().is_break() {
                        task_signal.stop();
                        break;
                    }
                    let slack = match pacing {
                        Pacing::Strict => {
                            let now = Instant::now();
                            wait = deadline.saturating_duration_since(now);
                            if now > deadline {
                                -(now - deadline).as_secs_f64()
                            } else {
                                wait.as_secs_f64()
                            }
                        }
                        Pacing::Relaxed => {
                            wait = period;
                            period.as_secs_f64()
                        }
                    };
                    total_slack += slack;
                }

                if stats.ticks > 0 {
                    stats.average_slack_secs = total_slack / stats.ticks as f64;
                }
                log::debug!(
                    "Ending periodic task {} after {} ticks (average slack {}s)",
                    task_name,
                    stats.ticks,
                    stats.average_slack_secs
                );
                stats
            })
            .map_err(|e| {
                let mut msg = heapless::String::new();
                for c in e.to_string().chars() {
                    if msg.push(c).is_err() {
                        break;
                    }
                }
                Error::Playback(PlaybackError::SpawnFailed(msg))
            })?;

        Ok(Self {
            name: name.to_owned(),
            signal,
            handle,
        })
    }

    /// Get the task name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if the task is still running.
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Ask the task to stop after its current tick.
    pub fn stop(&self) {
        self.signal.stop();
    }

    /// Check if a stop has been requested or the callback ended the task.
    pub fn is_stopped(&self) -> bool {
        self.signal.is_stopped()
    }

    /// Wait for the task to finish and return its statistics.
    ///
    /// # Errors
    ///
    /// Returns `PlaybackError::Panicked` if the callback panicked.
    pub fn join(self) -> Result<TaskStats> {
        self.handle
            .join()
            .map_err(|_| Error::Playback(PlaybackError::Panicked))
    }

    /// Stop the task and wait for it to finish.
    pub fn stop_and_join(self) -> Result<TaskStats> {
        self.stop();
        self.join()
    }
}

/// Play a trace on a background thread, one frame per `period`.
///
/// The task ends by itself after the last frame.
pub fn spawn_playback<T, F>(
    name: &str,
    mut player: TracePlayer<T>,
    period: Duration,
    mut on_frame: F,
) -> Result<PeriodicTask>
where
    T: Frames + Send + 'static,
    F: FnMut(T::Frame) + Send + 'static,
{
    PeriodicTask::spawn(name, period, Pacing::Strict, move || match player.advance() {
        Some(frame) => {
            on_frame(frame);
            if player.is_complete() {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        }
        None => ControlFlow::Break(()),
    })
}
