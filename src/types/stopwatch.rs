//! Stopwatch state machine.

use std::time::{Duration, Instant};

use super::format_hundredths;

/// An elapsed-time counter that can be paused and resumed.
///
/// Time spent running is accumulated in `elapsed` whenever the stopwatch
/// stops; while running, the live value adds the time since `started_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwatch {
    started_at: Option<Instant>,
    elapsed: Duration,
}

impl Stopwatch {
    /// Creates a stopped stopwatch at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while the stopwatch is counting.
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Starts a stopped stopwatch or stops a running one.
    pub fn toggle(&mut self, now: Instant) {
        match self.started_at.take() {
            Some(started_at) => {
                self.elapsed += now.saturating_duration_since(started_at);
            }
            None => {
                self.started_at = Some(now);
            }
        }
    }

    /// Stops the stopwatch and clears the elapsed time.
    pub fn reset(&mut self) {
        self.started_at = None;
        self.elapsed = Duration::ZERO;
    }

    /// Returns the elapsed time as of `now`.
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.started_at {
            Some(started_at) => self.elapsed + now.saturating_duration_since(started_at),
            None => self.elapsed,
        }
    }

    /// Returns the readout as `MM:SS.hh`.
    pub fn display(&self, now: Instant) -> String {
        format_hundredths(self.elapsed(now))
    }
}
