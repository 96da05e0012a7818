//! Sound player implementation using rodio.
//!
//! `RodioSoundPlayer` keeps at most one looping sink alive. Starting a new
//! loop replaces the previous one.

use std::io::Cursor;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tracing::{debug, warn};

use super::error::SoundError;
use super::source::SoundSource;

/// A sound player that uses rodio for audio playback.
///
/// Playback is non-blocking; the loop keeps sounding until [`stop`] is
/// called or the player is dropped.
///
/// [`stop`]: RodioSoundPlayer::stop
pub struct RodioSoundPlayer {
    /// The audio output stream (must be kept alive for playback).
    _stream: OutputStream,
    /// Handle to the output stream for creating sinks.
    stream_handle: OutputStreamHandle,
    /// The sink of the loop currently playing, if any.
    active: Mutex<Option<Sink>>,
    /// Whether sound playback is disabled.
    disabled: AtomicBool,
}

impl RodioSoundPlayer {
    /// Creates a new sound player.
    ///
    /// # Arguments
    ///
    /// * `disabled` - If true, all sound playback will be silently skipped.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device
    /// is available.
    pub fn new(disabled: bool) -> Result<Self, SoundError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;

        debug!("Audio output stream initialized");

        Ok(Self {
            _stream: stream,
            stream_handle,
            active: Mutex::new(None),
            disabled: AtomicBool::new(disabled),
        })
    }

    /// Starts playing `source` in an endless loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the clip cannot be decoded or no sink can be
    /// created on the output stream.
    pub fn play_looping(&self, source: &SoundSource) -> Result<(), SoundError> {
        if self.disabled.load(Ordering::Relaxed) {
            debug!("Sound playback disabled, skipping");
            return Ok(());
        }

        let decoder = Decoder::new_looped(Cursor::new(source.data()))
            .map_err(|e| SoundError::DecodeError(format!("{}: {}", source.name(), e)))?;
        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| SoundError::StreamError(e.to_string()))?;
        sink.append(decoder);

        let mut active = self
            .active
            .lock()
            .map_err(|_| SoundError::PlaybackError("player state poisoned".to_string()))?;
        if let Some(previous) = active.replace(sink) {
            previous.stop();
        }

        debug!("Looping playback started: {}", source.name());
        Ok(())
    }

    /// Stops the loop started by [`play_looping`](Self::play_looping).
    ///
    /// Stopping an idle player is a no-op.
    pub fn stop(&self) -> Result<(), SoundError> {
        let mut active = self
            .active
            .lock()
            .map_err(|_| SoundError::PlaybackError("player state poisoned".to_string()))?;
        if let Some(sink) = active.take() {
            sink.stop();
            debug!("Looping playback stopped");
        }
        Ok(())
    }

    /// Returns true if the audio system is available.
    ///
    /// This always returns true if the player was successfully created,
    /// as the audio stream is initialized during construction.
    #[must_use]
    pub fn is_available(&self) -> bool {
        true
    }
}

impl std::fmt::Debug for RodioSoundPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioSoundPlayer")
            .field("disabled", &self.disabled.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// Creates a sound player, returning None if audio is unavailable.
///
/// If audio initialization fails, a warning is logged and None is returned.
#[must_use]
pub fn try_create_player(disabled: bool) -> Option<Arc<RodioSoundPlayer>> {
    match RodioSoundPlayer::new(disabled) {
        Ok(player) => Some(Arc::new(player)),
        Err(e) => {
            warn!("Audio not available, alarm will be silent: {} ({})", e, e.suggestion());
            None
        }
    }
}
