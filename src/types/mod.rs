//! Core data types for chronotab.
//!
//! This module defines:
//! - The stopwatch and countdown state machines
//! - The title color cycle and the Start/Stop click cooldown
//! - Tab selection and application configuration

mod color_cycle;
mod cooldown;
mod countdown;
mod stopwatch;

use std::time::Duration;

pub use color_cycle::{ColorCycle, TitleColor, PALETTE_LEN};
pub use cooldown::ToggleCooldown;
pub use countdown::{Countdown, CountdownPhase};
pub use stopwatch::Stopwatch;

// ============================================================================
// TabMode
// ============================================================================

/// The view currently shown. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabMode {
    #[default]
    Stopwatch,
    Timer,
    Time,
}

impl TabMode {
    /// All tabs in left-to-right display order.
    pub const ALL: [TabMode; 3] = [TabMode::Stopwatch, TabMode::Timer, TabMode::Time];

    /// Returns the label shown on the tab and as the page title.
    pub fn label(&self) -> &'static str {
        match self {
            TabMode::Stopwatch => "Stopwatch",
            TabMode::Timer => "Timer",
            TabMode::Time => "Time",
        }
    }

    /// Returns the position of this tab in [`TabMode::ALL`].
    pub fn index(&self) -> usize {
        match self {
            TabMode::Stopwatch => 0,
            TabMode::Timer => 1,
            TabMode::Time => 2,
        }
    }

    /// Returns true if this tab has Start/Stop and Reset buttons.
    pub fn has_controls(&self) -> bool {
        !matches!(self, TabMode::Time)
    }

    /// Returns the key hint shown at the bottom of the tab, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            TabMode::Stopwatch => Some("SPACE start/stop | R reset"),
            TabMode::Timer => Some("UP/DOWN adjust | SPACE start/stop | R reset"),
            TabMode::Time => None,
        }
    }
}

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Title shown in the terminal title bar
    pub title: String,
    /// Frames rendered per second
    pub frame_rate: u32,
    /// Minimum spacing between accepted Start/Stop clicks
    pub toggle_cooldown: Duration,
    /// Time between two title color steps
    pub color_step: Duration,
    /// Countdown set-point shown on a fresh start
    pub default_timer_seconds: u32,
    /// Seconds added or removed per UP/DOWN key press
    pub adjust_step_seconds: u32,
    /// Whether the alarm plays silently
    pub muted: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Stopwatch v0.0.3.5".to_string(),
            frame_rate: 60,
            toggle_cooldown: Duration::from_millis(200),
            color_step: Duration::from_millis(250),
            default_timer_seconds: 60,
            adjust_step_seconds: 10,
            muted: false,
        }
    }
}

impl AppConfig {
    /// Sets the muted flag.
    pub fn with_muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    /// Sets the default countdown set-point.
    pub fn with_default_timer_seconds(mut self, seconds: u32) -> Self {
        self.default_timer_seconds = seconds;
        self
    }

    /// Returns the duration of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".to_string());
        }
        if self.frame_rate == 0 {
            return Err("frame rate must be at least 1".to_string());
        }
        if self.color_step.is_zero() {
            return Err("color step must be longer than zero".to_string());
        }
        if self.adjust_step_seconds == 0 {
            return Err("adjust step must be at least 1 second".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Formats a duration as `MM:SS.hh`. Minutes are not wrapped at 60.
pub fn format_hundredths(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    let hundredths = elapsed.subsec_millis() / 10;
    format!("{:02}:{:02}.{:02}", total_secs / 60, total_secs % 60, hundredths)
}

/// Formats whole seconds as `MM:SS`.
pub fn format_minutes_seconds(total_seconds: u64) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod tab_mode_tests {
        use super::*;

        #[test]
        fn test_default_is_stopwatch() {
            assert_eq!(TabMode::default(), TabMode::Stopwatch);
        }

        #[test]
        fn test_all_is_left_to_right() {
            for (i, tab) in TabMode::ALL.iter().enumerate() {
                assert_eq!(tab.index(), i);
            }
        }

        #[test]
        fn test_labels() {
            assert_eq!(TabMode::Stopwatch.label(), "Stopwatch");
            assert_eq!(TabMode::Timer.label(), "Timer");
            assert_eq!(TabMode::Time.label(), "Time");
        }

        #[test]
        fn test_time_tab_has_no_controls_or_hint() {
            assert!(TabMode::Stopwatch.has_controls());
            assert!(TabMode::Timer.has_controls());
            assert!(!TabMode::Time.has_controls());
            assert!(TabMode::Time.hint().is_none());
        }

        #[test]
        fn test_timer_hint_mentions_adjust() {
            assert!(TabMode::Timer.hint().unwrap().contains("UP/DOWN"));
            assert!(!TabMode::Stopwatch.hint().unwrap().contains("UP/DOWN"));
        }
    }

    mod app_config_tests {
        use super::*;

        #[test]
        fn test_default_values() {
            let config = AppConfig::default();
            assert_eq!(config.frame_rate, 60);
            assert_eq!(config.toggle_cooldown, Duration::from_millis(200));
            assert_eq!(config.color_step, Duration::from_millis(250));
            assert_eq!(config.default_timer_seconds, 60);
            assert_eq!(config.adjust_step_seconds, 10);
            assert!(!config.muted);
        }

        #[test]
        fn test_default_is_valid() {
            assert!(AppConfig::default().validate().is_ok());
        }

        #[test]
        fn test_builders() {
            let config = AppConfig::default()
                .with_muted(true)
                .with_default_timer_seconds(5);
            assert!(config.muted);
            assert_eq!(config.default_timer_seconds, 5);
        }

        #[test]
        fn test_frame_duration() {
            let config = AppConfig::default();
            assert_eq!(config.frame_duration(), Duration::from_nanos(16_666_666));
        }

        #[test]
        fn test_validate_rejects_zero_frame_rate() {
            let config = AppConfig {
                frame_rate: 0,
                ..AppConfig::default()
            };
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_rejects_empty_title() {
            let config = AppConfig {
                title: "  ".to_string(),
                ..AppConfig::default()
            };
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_rejects_zero_color_step() {
            let config = AppConfig {
                color_step: Duration::ZERO,
                ..AppConfig::default()
            };
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_rejects_zero_adjust_step() {
            let config = AppConfig {
                adjust_step_seconds: 0,
                ..AppConfig::default()
            };
            assert!(config.validate().is_err());
        }
    }

    mod format_tests {
        use super::*;

        #[test]
        fn test_format_hundredths_zero() {
            assert_eq!(format_hundredths(Duration::ZERO), "00:00.00");
        }

        #[test]
        fn test_format_hundredths_truncates() {
            assert_eq!(format_hundredths(Duration::from_millis(61_239)), "01:01.23");
        }

        #[test]
        fn test_format_hundredths_past_an_hour() {
            assert_eq!(format_hundredths(Duration::from_secs(3_725)), "62:05.00");
        }

        #[test]
        fn test_format_minutes_seconds() {
            assert_eq!(format_minutes_seconds(0), "00:00");
            assert_eq!(format_minutes_seconds(60), "01:00");
            assert_eq!(format_minutes_seconds(125), "02:05");
        }
    }
}
