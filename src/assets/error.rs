//! Asset loading error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading bundled assets. All of them abort startup.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The asset does not exist at the resolved path.
    #[error("asset not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The asset exists but could not be read.
    #[error("failed to read asset {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = AssetError::NotFound(PathBuf::from("/tmp/assets/alarm.wav"));
        assert!(err.to_string().contains("asset not found"));
        assert!(err.to_string().contains("alarm.wav"));
    }

    #[test]
    fn test_read_display_includes_cause() {
        let err = AssetError::Read {
            path: PathBuf::from("assets/alarm.wav"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("assets/alarm.wav"));
        assert!(err.to_string().contains("denied"));
    }
}
