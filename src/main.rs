//! chronotab - stopwatch, countdown timer and clock for the terminal
//!
//! Three tabs share one screen:
//! - Stopwatch: elapsed time with hundredths
//! - Timer: adjustable countdown that sounds an alarm at zero
//! - Time: the current local time

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use chronotab::cli::{Cli, Display};
use chronotab::sound::{try_create_player, Alarm, NullSoundPlayer, SoundPlayer};
use chronotab::{app, assets, logging};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let log_path = logging::init(cli.verbose);

    if let Err(e) = execute(cli).await {
        tracing::error!("{:#}", e);
        Display::show_error(&e);
        if let Some(path) = log_path {
            Display::show_log_location(&path);
        }
        std::process::exit(1);
    }
}

/// Loads assets, opens the audio device and runs the UI.
async fn execute(cli: Cli) -> Result<()> {
    let config = cli.to_config();
    config.validate().map_err(anyhow::Error::msg)?;
    info!("Starting {} (muted: {})", config.title, config.muted);

    let clip = assets::load_alarm_sound().context("failed to load the alarm sound")?;

    let player: Box<dyn SoundPlayer> = match try_create_player(config.muted) {
        Some(player) => Box::new(player),
        None => Box::new(NullSoundPlayer),
    };
    info!(audio = player.is_available(), "Alarm player ready");
    let alarm = Alarm::new(player, clip);

    app::run(config, alarm).await
}
