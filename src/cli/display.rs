//! Messages printed after the terminal has been handed back.

use std::path::Path;

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows an error with its chain of causes.
    pub fn show_error(error: &anyhow::Error) {
        eprintln!("{}", Self::format_error(error));
    }

    /// Tells the user where to find the logs.
    pub fn show_log_location(path: &Path) {
        eprintln!("See {} for details.", path.display());
    }

    /// Formats an error as `error: outer` followed by one `caused by:` line
    /// per cause.
    pub fn format_error(error: &anyhow::Error) -> String {
        let mut message = format!("error: {}", error);
        for cause in error.chain().skip(1) {
            message.push_str(&format!("\n  caused by: {}", cause));
        }
        message
    }
}
