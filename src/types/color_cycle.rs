//! Title color cycle.
//!
//! While the stopwatch or the countdown is running, the page title steps
//! through a fixed palette. The cycle is an accumulator checked once per
//! frame: every whole `step` elapsed since the last advance moves the title
//! one color further.

use std::time::{Duration, Instant};

/// Number of colors in the title palette.
pub const PALETTE_LEN: usize = 4;

/// Color of the page title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleColor {
    /// Shown whenever nothing is running
    #[default]
    Neutral,
    /// Index into the palette (red, yellow, green, blue)
    Palette(usize),
}

#[derive(Debug, Clone)]
pub struct ColorCycle {
    step: Duration,
    armed_at: Option<Instant>,
    next_index: usize,
    color: TitleColor,
}

impl ColorCycle {
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            armed_at: None,
            next_index: 0,
            color: TitleColor::Neutral,
        }
    }

    /// Returns true while the cycle is armed.
    pub fn is_active(&self) -> bool {
        self.armed_at.is_some()
    }

    pub fn color(&self) -> TitleColor {
        self.color
    }

    /// Arms the cycle if it is not already running.
    pub fn start_if_needed(&mut self, now: Instant) {
        if self.armed_at.is_none() {
            self.armed_at = Some(now);
        }
    }

    /// Disarms the cycle and restores the neutral title when nothing runs.
    ///
    /// The palette position is kept, so a later start resumes the sequence.
    pub fn stop_if_idle(&mut self, stopwatch_running: bool, countdown_running: bool) {
        if !stopwatch_running && !countdown_running {
            self.armed_at = None;
            self.color = TitleColor::Neutral;
        }
    }

    /// Advances by the number of whole steps elapsed since the last advance.
    pub fn tick(&mut self, now: Instant) {
        let Some(armed_at) = self.armed_at else {
            return;
        };
        let since = now.saturating_duration_since(armed_at);
        let steps = (since.as_nanos() / self.step.as_nanos().max(1)) as u64;
        if steps == 0 {
            return;
        }

        let current = (self.next_index + (steps % PALETTE_LEN as u64) as usize + PALETTE_LEN - 1)
            % PALETTE_LEN;
        self.color = TitleColor::Palette(current);
        self.next_index = (current + 1) % PALETTE_LEN;
        self.armed_at = Some(armed_at + self.step * steps as u32);
    }
}
