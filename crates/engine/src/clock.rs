//! Frame timing: elapsed-time clock and frame pacing.

use std::time::{Duration, Instant};

/// Monotonic clock returning seconds elapsed between ticks.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn starting_at(start: Instant) -> Self {
        Self { last: start }
    }

    /// Seconds since the previous tick (or since `start` for the first one).
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

/// Frames per second for a frame that took `dt` seconds.
///
/// `None` when `dt` is not positive (shown as infinite).
pub fn fps(dt: f32) -> Option<f32> {
    if dt > 0.0 {
        Some(1.0 / dt)
    } else {
        None
    }
}

/// Bounds the loop to a target frame rate.
///
/// The loop waits on input for [`FramePacer::remaining`] after presenting a
/// frame, so it never busy-spins while the target is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    budget: Option<Duration>,
}

impl FramePacer {
    /// `target_fps == 0` disables pacing.
    pub fn new(target_fps: u32) -> Self {
        let budget = if target_fps == 0 {
            None
        } else {
            Some(Duration::from_secs(1) / target_fps)
        };
        Self { budget }
    }

    pub fn budget(&self) -> Option<Duration> {
        self.budget
    }

    /// Time left in the frame that started at `frame_start`.
    pub fn remaining(&self, frame_start: Instant, now: Instant) -> Duration {
        match self.budget {
            Some(budget) => budget.saturating_sub(now.saturating_duration_since(frame_start)),
            None => Duration::ZERO,
        }
    }
}
