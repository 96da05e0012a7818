//! The frame loop.
//!
//! Each frame waits for the next tick of a fixed-rate interval, samples the
//! clock once, updates the state machines, applies every pending input event
//! in arrival order and draws. Nothing blocks except the wait for the tick.

use std::io::{self, Stdout};
use std::panic::{self, PanicHookInfo};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
};
use ratatui::layout::Rect;
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

use super::input::InputEvent;
use super::state::App;
use crate::sound::Alarm;
use crate::types::AppConfig;
use crate::ui;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Takes over the terminal and runs until the user closes the app.
///
/// The terminal is restored on every exit path, including panics.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to or read from.
pub async fn run(config: AppConfig, alarm: Alarm) -> Result<()> {
    let _hook = PanicHookGuard::install(|| {
        let _ = restore_terminal();
    });

    let mut terminal = setup_terminal(&config.title).context("failed to set up the terminal")?;
    let result = event_loop(&mut terminal, config, alarm).await;
    restore_terminal().context("failed to restore the terminal")?;
    result
}

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Send + Sync + 'static>;

/// Runs a cleanup before the panic hook that was current at install time.
/// Dropping the guard puts that hook back.
struct PanicHookGuard {
    original: Option<Arc<PanicHook>>,
}

impl PanicHookGuard {
    fn install(cleanup: fn()) -> Self {
        let original = Arc::new(panic::take_hook());
        let chained = Arc::clone(&original);
        panic::set_hook(Box::new(move |info| {
            cleanup();
            (**chained)(info);
        }));
        Self {
            original: Some(original),
        }
    }
}

impl Drop for PanicHookGuard {
    fn drop(&mut self) {
        // The hook cannot be swapped from a panicking thread
        if std::thread::panicking() {
            return;
        }
        let Some(original) = self.original.take() else {
            return;
        };
        drop(panic::take_hook());
        match Arc::try_unwrap(original) {
            Ok(hook) => panic::set_hook(hook),
            Err(shared) => panic::set_hook(Box::new(move |info| (**shared)(info))),
        }
    }
}

fn setup_terminal(title: &str) -> Result<Tui> {
    enable_raw_mode()?;
    or_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(title))?;
            Ok(Terminal::new(CrosstermBackend::new(stdout))?)
        },
        || {
            let _ = restore_terminal();
        },
    )
}

/// Runs `step`, calling `restore` before returning its error.
fn or_restore<T>(step: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    step().inspect_err(|_| restore())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn event_loop(terminal: &mut Tui, config: AppConfig, alarm: Alarm) -> Result<()> {
    let started = Instant::now();
    let size = terminal.size()?;
    let mut ticker = interval(config.frame_duration());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut app = App::new(config, alarm, Rect::new(0, 0, size.width, size.height));

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    info!("Event loop started");

    while !app.should_quit() {
        tokio::select! {
            _ = ticker.tick() => {}
            () = &mut shutdown => {
                info!("Termination signal received");
                break;
            }
        }

        let now = Instant::now();
        let tick_ms = now.duration_since(started).as_millis() as u64;

        app.tick(now);
        for event in drain_input()? {
            app.handle_input(event, now, tick_ms);
        }
        if app.should_quit() {
            break;
        }

        let wall_clock = chrono::Local::now().time();
        let mut drawn = None;
        terminal.draw(|frame| drawn = Some(ui::render(frame, &app, now, wall_clock)))?;
        if let Some(layout) = drawn {
            app.set_layout(layout);
        }
    }

    app.shutdown();
    info!("Event loop stopped");
    Ok(())
}

/// Reads every event already queued by the terminal without waiting.
fn drain_input() -> Result<Vec<InputEvent>> {
    let mut events = Vec::new();
    while event::poll(Duration::ZERO).context("failed to poll terminal input")? {
        let raw = event::read().context("failed to read terminal input")?;
        if let Some(event) = InputEvent::from_crossterm(raw) {
            events.push(event);
        }
    }
    Ok(events)
}

/// Resolves when the process is asked to terminate.
///
/// Covers SIGINT, SIGTERM and SIGHUP (the terminal window being closed).
#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let (Ok(mut terminate), Ok(mut hangup)) = (
        signal(SignalKind::terminate()),
        signal(SignalKind::hangup()),
    ) else {
        warn!("Could not install signal handlers; only Ctrl-C will close the app");
        return std::future::pending().await;
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = terminate.recv() => {}
        _ = hangup.recv() => {}
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Could not listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
