//! Command-line arguments.
//!
//! Uses clap derive macro for argument parsing.

use clap::Parser;

use crate::types::AppConfig;

/// chronotab - stopwatch, countdown timer and clock in one terminal window
#[derive(Parser, Debug)]
#[command(
    name = "chronotab",
    version,
    about = "Tabbed stopwatch, countdown timer and clock for the terminal",
    long_about = "Tabbed stopwatch, countdown timer and clock for the terminal.\n\n\
                  Click a tab or a button, or use the keyboard:\n  \
                  SPACE   start/stop\n  \
                  R       reset\n  \
                  UP/DOWN adjust the timer by 10 seconds (timer stopped)\n  \
                  Ctrl-C  quit"
)]
pub struct Cli {
    /// Write debug-level logs to the log file
    #[arg(short, long)]
    pub verbose: bool,

    /// Keep the alarm silent when the timer reaches zero
    #[arg(long)]
    pub mute: bool,
}

impl Cli {
    /// Builds the application configuration from the parsed arguments.
    pub fn to_config(&self) -> AppConfig {
        AppConfig::default().with_muted(self.mute)
    }
}
