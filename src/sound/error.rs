//! Sound system error types.
//!
//! Every sound error is recoverable: the alarm state machine keeps running
//! and only the audible part is lost.

use thiserror::Error;

/// Errors that can occur in the sound playback system.
#[derive(Debug, Error)]
pub enum SoundError {
    /// Audio device is not available (e.g., no speakers connected).
    #[error("audio device not available: {0}")]
    DeviceNotAvailable(String),

    /// Failed to decode the audio data.
    #[error("failed to decode sound: {0}")]
    DecodeError(String),

    /// Failed to create an output sink on the audio stream.
    #[error("failed to open audio stream: {0}")]
    StreamError(String),

    /// Generic sound playback error.
    #[error("sound playback error: {0}")]
    PlaybackError(String),
}

impl SoundError {
    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::DeviceNotAvailable(_) => "connect an audio output device",
            Self::DecodeError(_) => "the alarm sound file may be corrupt",
            Self::StreamError(_) => "check the audio settings",
            Self::PlaybackError(_) => "restart the application",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SoundError::DeviceNotAvailable("no device".to_string());
        assert!(err.to_string().contains("no device"));
        assert!(err.to_string().contains("audio device not available"));

        let err = SoundError::DecodeError("invalid format".to_string());
        assert!(err.to_string().contains("invalid format"));

        let err = SoundError::StreamError("stream failed".to_string());
        assert!(err.to_string().contains("stream failed"));

        let err = SoundError::PlaybackError("unknown error".to_string());
        assert!(err.to_string().contains("unknown error"));
    }

    #[test]
    fn test_suggestion() {
        assert!(SoundError::DeviceNotAvailable("x".into())
            .suggestion()
            .contains("audio output"));
        assert!(SoundError::DecodeError("x".into()).suggestion().contains("corrupt"));
        assert!(SoundError::StreamError("x".into()).suggestion().contains("settings"));
        assert!(SoundError::PlaybackError("x".into()).suggestion().contains("restart"));
    }
}
