//! Bundled asset lookup.
//!
//! A packaged build ships an `assets/` directory next to the executable.
//! When that directory exists, assets resolve against the executable's
//! directory; otherwise they resolve against the current working directory,
//! which is what a source checkout run with `cargo run` expects.

mod error;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::sound::SoundSource;

pub use error::AssetError;

/// Name of the directory holding bundled assets.
pub const ASSET_DIR: &str = "assets";

/// Relative path of the alarm clip.
pub const ALARM_SOUND: &str = "assets/alarm.wav";

/// Returns the directory of the running executable if it carries an
/// `assets/` directory.
#[must_use]
pub fn bundle_dir() -> Option<PathBuf> {
    bundle_dir_for(&std::env::current_exe().ok()?)
}

/// Returns the directory holding `exe` if an `assets/` directory sits
/// next to it.
#[must_use]
pub fn bundle_dir_for(exe: &Path) -> Option<PathBuf> {
    let dir = exe.parent()?;
    dir.join(ASSET_DIR).is_dir().then(|| dir.to_path_buf())
}

/// Joins `relative` onto the bundle directory when there is one, else onto
/// `cwd`.
#[must_use]
pub fn resolve_in(bundle: Option<&Path>, cwd: &Path, relative: impl AsRef<Path>) -> PathBuf {
    bundle.unwrap_or(cwd).join(relative)
}

/// Resolves a bundled asset path for the running process.
#[must_use]
pub fn resource_path(relative: impl AsRef<Path>) -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    resolve_in(bundle_dir().as_deref(), &cwd, relative)
}

/// Reads a sound clip into memory.
///
/// # Errors
///
/// Returns `AssetError::NotFound` if the file is missing, or
/// `AssetError::Read` if it cannot be read.
pub fn load_sound(path: &Path) -> Result<SoundSource, AssetError> {
    let data = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            AssetError::NotFound(path.to_path_buf())
        } else {
            AssetError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sound".to_string());
    debug!("Loaded sound '{}' ({} bytes) from {}", name, data.len(), path.display());

    Ok(SoundSource::from_bytes(name, data))
}

/// Loads the alarm clip from its bundled location.
///
/// # Errors
///
/// See [`load_sound`].
pub fn load_alarm_sound() -> Result<SoundSource, AssetError> {
    load_sound(&resource_path(ALARM_SOUND))
}
