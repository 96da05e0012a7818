//! The countdown alarm.

use std::fmt;

use tracing::{debug, warn};

use super::{SoundPlayer, SoundSource};

/// One looping alarm sound with idempotent on/off.
///
/// Turning the alarm on while it already sounds, or off while it is silent,
/// does nothing; play calls never stack.
pub struct Alarm {
    player: Box<dyn SoundPlayer>,
    source: SoundSource,
    playing: bool,
}

impl Alarm {
    pub fn new(player: Box<dyn SoundPlayer>, source: SoundSource) -> Self {
        Self {
            player,
            source,
            playing: false,
        }
    }

    /// Returns true while the alarm is on.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Turns the alarm on or off.
    ///
    /// Playback errors are logged; the alarm still counts as on so that a
    /// broken device is not retried every frame.
    pub fn set_playing(&mut self, play: bool) {
        if play == self.playing {
            return;
        }
        self.playing = play;

        let result = if play {
            debug!("Alarm on");
            self.player.play_looping(&self.source)
        } else {
            debug!("Alarm off");
            self.player.stop()
        };
        if let Err(e) = result {
            warn!("Alarm sound failed: {}", e);
        }
    }
}

impl fmt::Debug for Alarm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alarm")
            .field("source", &self.source.name())
            .field("playing", &self.playing)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::sound::MockSoundPlayer;

    fn alarm() -> (Alarm, Arc<MockSoundPlayer>) {
        let mock = Arc::new(MockSoundPlayer::new());
        let source = SoundSource::from_bytes("alarm", vec![0u8; 8]);
        (Alarm::new(Box::new(Arc::clone(&mock)), source), mock)
    }

    #[test]
    fn test_starts_silent() {
        let (alarm, mock) = alarm();
        assert!(!alarm.is_playing());
        assert_eq!(mock.play_count(), 0);
    }

    #[test]
    fn test_repeated_on_plays_once() {
        let (mut alarm, mock) = alarm();
        alarm.set_playing(true);
        alarm.set_playing(true);
        alarm.set_playing(true);

        assert!(alarm.is_playing());
        assert_eq!(mock.play_count(), 1);
    }

    #[test]
    fn test_off_while_silent_does_not_stop() {
        let (mut alarm, mock) = alarm();
        alarm.set_playing(false);
        assert_eq!(mock.stop_count(), 0);
    }

    #[test]
    fn test_on_then_off() {
        let (mut alarm, mock) = alarm();
        alarm.set_playing(true);
        alarm.set_playing(false);
        alarm.set_playing(false);

        assert!(!alarm.is_playing());
        assert!(!mock.is_playing());
        assert_eq!(mock.stop_count(), 1);
    }

    #[test]
    fn test_failed_playback_still_counts_as_on() {
        let (mut alarm, mock) = alarm();
        mock.set_should_fail(true);

        alarm.set_playing(true);
        alarm.set_playing(true);

        assert!(alarm.is_playing());
        assert_eq!(mock.play_count(), 0);
    }

    #[test]
    fn test_debug_impl() {
        let (alarm, _mock) = alarm();
        let debug_str = format!("{:?}", alarm);
        assert!(debug_str.contains("Alarm"));
        assert!(debug_str.contains("alarm"));
    }
}
