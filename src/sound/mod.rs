//! Sound playback for the countdown alarm.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │      Alarm       │ ← idempotent on/off, driven by the countdown
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │   SoundPlayer    │────▶│ RodioSoundPlayer │
//! │     (trait)      │     ├──────────────────┤
//! │                  │────▶│ NullSoundPlayer  │ (no audio device)
//! │                  │     ├──────────────────┤
//! │                  │────▶│ MockSoundPlayer  │ (tests)
//! └──────────────────┘     └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use chronotab::sound::{Alarm, RodioSoundPlayer, SoundSource};
//!
//! let player = RodioSoundPlayer::new(false).expect("audio init");
//! let clip = SoundSource::from_bytes("alarm", std::fs::read("assets/alarm.wav").unwrap());
//! let mut alarm = Alarm::new(Box::new(player), clip);
//!
//! alarm.set_playing(true);
//! alarm.set_playing(true); // still one loop
//! alarm.set_playing(false);
//! ```

mod alarm;
mod error;
mod player;
mod source;

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub use alarm::Alarm;
pub use error::SoundError;
pub use player::{try_create_player, RodioSoundPlayer};
pub use source::SoundSource;

/// Trait for looping sound playback.
///
/// Implementations keep at most one loop sounding at a time.
pub trait SoundPlayer {
    /// Starts playing `source` in a loop, in the background.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails.
    fn play_looping(&self, source: &SoundSource) -> Result<(), SoundError>;

    /// Stops the current loop. Stopping an idle player succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the player state cannot be reached.
    fn stop(&self) -> Result<(), SoundError>;

    /// Returns true if the audio system is available.
    fn is_available(&self) -> bool;
}

impl SoundPlayer for RodioSoundPlayer {
    fn play_looping(&self, source: &SoundSource) -> Result<(), SoundError> {
        RodioSoundPlayer::play_looping(self, source)
    }

    fn stop(&self) -> Result<(), SoundError> {
        RodioSoundPlayer::stop(self)
    }

    fn is_available(&self) -> bool {
        RodioSoundPlayer::is_available(self)
    }
}

impl<P: SoundPlayer + ?Sized> SoundPlayer for Arc<P> {
    fn play_looping(&self, source: &SoundSource) -> Result<(), SoundError> {
        (**self).play_looping(source)
    }

    fn stop(&self) -> Result<(), SoundError> {
        (**self).stop()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

/// Player used when no audio device could be opened.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSoundPlayer;

impl SoundPlayer for NullSoundPlayer {
    fn play_looping(&self, _source: &SoundSource) -> Result<(), SoundError> {
        Ok(())
    }

    fn stop(&self) -> Result<(), SoundError> {
        Ok(())
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Mock sound player for testing.
#[derive(Debug, Default)]
pub struct MockSoundPlayer {
    play_calls: Mutex<Vec<SoundSource>>,
    stop_calls: AtomicUsize,
    playing: AtomicBool,
    should_fail: AtomicBool,
}

impl MockSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_calls.lock().unwrap().len()
    }

    #[must_use]
    pub fn stop_count(&self) -> usize {
        self.stop_calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn get_play_calls(&self) -> Vec<SoundSource> {
        self.play_calls.lock().unwrap().clone()
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn play_looping(&self, source: &SoundSource) -> Result<(), SoundError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        self.play_calls.lock().unwrap().push(source.clone());
        self.playing.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn stop(&self) -> Result<(), SoundError> {
        self.stop_calls.fetch_add(1, Ordering::SeqCst);
        self.playing.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn is_available(&self) -> bool {
        true
    }
}
