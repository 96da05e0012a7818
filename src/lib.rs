//! chronotab library
//!
//! A stopwatch, a countdown timer and a wall clock behind three tabs in one
//! terminal window. It includes:
//! - Stopwatch and countdown state machines, title color cycle and click
//!   cooldown (`types`)
//! - Application state, input routing and the frame loop (`app`)
//! - Screen layout, hit-testing and drawing with ratatui (`ui`)
//! - Looping alarm playback with rodio (`sound`)
//! - Bundled asset lookup (`assets`)
//! - Command-line arguments and log setup (`cli`, `logging`)

pub mod app;
pub mod assets;
pub mod cli;
pub mod logging;
pub mod sound;
pub mod types;
pub mod ui;

// Re-export commonly used types for convenience
pub use app::{App, InputEvent, Key};
pub use types::{AppConfig, Countdown, CountdownPhase, Stopwatch, TabMode, TitleColor};

pub use sound::{
    try_create_player, Alarm, MockSoundPlayer, NullSoundPlayer, RodioSoundPlayer, SoundError,
    SoundPlayer, SoundSource,
};

pub use assets::{load_alarm_sound, resource_path, AssetError};
