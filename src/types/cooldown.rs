//! Debounce for the Start/Stop button.

use std::time::Duration;

/// Rejects Start/Stop clicks that arrive too soon after the last accepted one.
///
/// Times are loop ticks in milliseconds since startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleCooldown {
    window_ms: u64,
    last_accepted_ms: Option<u64>,
}

impl ToggleCooldown {
    pub fn new(window: Duration) -> Self {
        Self {
            window_ms: window.as_millis() as u64,
            last_accepted_ms: None,
        }
    }

    /// Returns true and records the click if it falls outside the window.
    pub fn try_accept(&mut self, tick_ms: u64) -> bool {
        let accepted = match self.last_accepted_ms {
            Some(last) => tick_ms.saturating_sub(last) >= self.window_ms,
            None => true,
        };
        if accepted {
            self.last_accepted_ms = Some(tick_ms);
        }
        accepted
    }
}
