//! Countdown timer state machine.
//!
//! The countdown is `Idle` while its set-point is editable, `Running` once
//! started, and `Alarming` after the remaining time reaches zero. The alarm
//! stays on until the countdown is toggled or reset.

use std::time::{Duration, Instant};

use super::format_minutes_seconds;

/// Phase of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountdownPhase {
    /// Stopped; shows the set-point and accepts adjustments
    #[default]
    Idle,
    /// Counting down towards `ends_at`
    Running { ends_at: Instant },
    /// Reached zero; the alarm is sounding
    Alarming { ends_at: Instant },
}

impl CountdownPhase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            CountdownPhase::Idle => "idle",
            CountdownPhase::Running { .. } => "running",
            CountdownPhase::Alarming { .. } => "alarming",
        }
    }
}

/// A countdown with an adjustable set-point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    phase: CountdownPhase,
    set_seconds: u32,
}

impl Countdown {
    /// Creates an idle countdown with the given set-point.
    pub fn new(set_seconds: u32) -> Self {
        Self {
            phase: CountdownPhase::Idle,
            set_seconds,
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> CountdownPhase {
        self.phase
    }

    /// Returns the set-point in seconds.
    pub fn set_seconds(&self) -> u32 {
        self.set_seconds
    }

    /// Returns true while counting down or alarming.
    pub fn is_running(&self) -> bool {
        !self.is_idle()
    }

    /// Returns true while the set-point is editable.
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, CountdownPhase::Idle)
    }

    /// Returns true once the countdown has reached zero.
    pub fn is_alarming(&self) -> bool {
        matches!(self.phase, CountdownPhase::Alarming { .. })
    }

    /// Starts an idle countdown, or stops a running or alarming one.
    ///
    /// Stopping keeps the set-point; the next start counts down from it again.
    pub fn toggle(&mut self, now: Instant) {
        self.phase = match self.phase {
            CountdownPhase::Idle => CountdownPhase::Running {
                ends_at: now + Duration::from_secs(u64::from(self.set_seconds)),
            },
            CountdownPhase::Running { .. } | CountdownPhase::Alarming { .. } => {
                CountdownPhase::Idle
            }
        };
    }

    /// Returns to idle. The set-point is never cleared.
    pub fn reset(&mut self) {
        self.phase = CountdownPhase::Idle;
    }

    /// Moves the set-point by `delta_seconds`, clamped at zero.
    ///
    /// Has no effect unless idle. Returns true if the countdown was idle.
    pub fn adjust(&mut self, delta_seconds: i64) -> bool {
        if !self.is_idle() {
            return false;
        }
        let adjusted = (i64::from(self.set_seconds) + delta_seconds).clamp(0, i64::from(u32::MAX));
        self.set_seconds = adjusted as u32;
        true
    }

    /// Advances the countdown to `now`.
    ///
    /// Returns true only on the frame the countdown enters `Alarming`.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase {
            CountdownPhase::Running { ends_at } if now >= ends_at => {
                self.phase = CountdownPhase::Alarming { ends_at };
                true
            }
            _ => false,
        }
    }

    /// Returns the remaining time as of `now`, never negative.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.phase {
            CountdownPhase::Idle => Duration::from_secs(u64::from(self.set_seconds)),
            CountdownPhase::Running { ends_at } | CountdownPhase::Alarming { ends_at } => {
                ends_at.saturating_duration_since(now)
            }
        }
    }

    /// Returns the remaining whole seconds, rounded up.
    ///
    /// Reads zero exactly when the end instant has been reached.
    pub fn remaining_seconds(&self, now: Instant) -> u64 {
        let remaining = self.remaining(now);
        remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0)
    }

    /// Returns the readout as `MM:SS`.
    pub fn display(&self, now: Instant) -> String {
        format_minutes_seconds(self.remaining_seconds(now))
    }
}
