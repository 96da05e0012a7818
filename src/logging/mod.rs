//! Diagnostic logging.
//!
//! The terminal belongs to the UI while the app runs, so log output goes to
//! a file under the platform's local data directory
//! (`~/.local/share/chronotab/chronotab.log` on Linux). When that file cannot
//! be opened, log output is discarded.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

const APP_DIR: &str = "chronotab";
const LOG_FILE: &str = "chronotab.log";

/// Returns where the log file lives on this platform.
#[must_use]
pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR).join(LOG_FILE))
}

/// Returns the filter directive used when `RUST_LOG` does not apply.
#[must_use]
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Builds the log filter. `--verbose` wins over `RUST_LOG`.
fn build_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(default_directive(true));
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(false)))
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Initializes the tracing subscriber.
///
/// Returns the path of the log file, or None if logs are discarded.
pub fn init(verbose: bool) -> Option<PathBuf> {
    let builder = fmt()
        .with_env_filter(build_filter(verbose))
        .with_target(false)
        .with_ansi(false);

    let opened = log_file_path().and_then(|path| open_log_file(&path).ok().map(|file| (path, file)));

    match opened {
        Some((path, file)) => {
            builder.with_writer(Mutex::new(file)).init();
            Some(path)
        }
        None => {
            builder.with_writer(std::io::sink).init();
            None
        }
    }
}
