//! Wall-clock bookkeeping for the driver that calls `Simulation::step`.

use std::time::Instant;

/// Tracks the instant of the previous step and refuses overlapping steps.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
    in_step: bool,
}

impl FrameClock {
    pub fn start(now: Instant) -> Self {
        Self {
            last: now,
            in_step: false,
        }
    }

    /// Milliseconds since the previous tick (or since `start`), then advance.
    /// A `now` earlier than the previous tick yields 0.
    pub fn tick(&mut self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.last);
        self.last = now;
        elapsed.as_secs_f64() * 1000.0
    }

    /// Mark a step as started. Returns false if one is already running, in
    /// which case the caller must skip this tick.
    pub fn try_begin(&mut self) -> bool {
        if self.in_step {
            return false;
        }
        self.in_step = true;
        true
    }

    pub fn finish(&mut self) {
        self.in_step = false;
    }
}
