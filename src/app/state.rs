//! Application state and input routing.
//!
//! `App` owns every state machine and is mutated only by the event loop.
//! Every operation takes `now` explicitly; nothing in here reads a clock.

use std::time::Instant;

use ratatui::layout::{Position, Rect};
use tracing::debug;

use super::input::{InputEvent, Key};
use crate::sound::Alarm;
use crate::types::{
    AppConfig, ColorCycle, Countdown, Stopwatch, TabMode, TitleColor, ToggleCooldown,
};
use crate::ui::{Hit, ScreenLayout};

#[derive(Debug)]
pub struct App {
    config: AppConfig,
    tab: TabMode,
    stopwatch: Stopwatch,
    countdown: Countdown,
    colors: ColorCycle,
    cooldown: ToggleCooldown,
    alarm: Alarm,
    layout: ScreenLayout,
    should_quit: bool,
}

impl App {
    /// Creates the application for a screen of the given size.
    pub fn new(config: AppConfig, alarm: Alarm, area: Rect) -> Self {
        Self {
            tab: TabMode::default(),
            stopwatch: Stopwatch::new(),
            countdown: Countdown::new(config.default_timer_seconds),
            colors: ColorCycle::new(config.color_step),
            cooldown: ToggleCooldown::new(config.toggle_cooldown),
            alarm,
            layout: ScreenLayout::compute(area),
            should_quit: false,
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn tab(&self) -> TabMode {
        self.tab
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn title_color(&self) -> TitleColor {
        self.colors.color()
    }

    /// Returns true while the title color cycle is armed.
    pub fn is_color_cycling(&self) -> bool {
        self.colors.is_active()
    }

    pub fn is_alarm_playing(&self) -> bool {
        self.alarm.is_playing()
    }

    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    /// Replaces the layout mouse-downs are hit-tested against.
    pub fn set_layout(&mut self, layout: ScreenLayout) {
        self.layout = layout;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Switches the visible tab. Neither state machine is touched.
    pub fn select_tab(&mut self, tab: TabMode) {
        if self.tab != tab {
            debug!("Tab selected: {}", tab.label());
            self.tab = tab;
        }
    }

    /// Per-frame update: raises the alarm at zero and steps the title color.
    pub fn tick(&mut self, now: Instant) {
        if self.countdown.tick(now) {
            debug!("Countdown reached zero");
        }
        self.alarm.set_playing(self.countdown.is_alarming());
        self.colors.tick(now);
    }

    /// Starts or stops the machine of the active tab. No-op on the Time tab.
    pub fn toggle_active(&mut self, now: Instant) {
        match self.tab {
            TabMode::Stopwatch => {
                self.stopwatch.toggle(now);
                debug!(running = self.stopwatch.is_running(), "Stopwatch toggled");
            }
            TabMode::Timer => {
                self.countdown.toggle(now);
                debug!(phase = self.countdown.phase().as_str(), "Countdown toggled");
            }
            TabMode::Time => return,
        }
        self.after_transition(now);
    }

    /// Resets the machine of the active tab. No-op on the Time tab.
    pub fn reset_active(&mut self, now: Instant) {
        match self.tab {
            TabMode::Stopwatch => {
                self.stopwatch.reset();
                debug!("Stopwatch reset");
            }
            TabMode::Timer => {
                self.countdown.reset();
                debug!("Countdown reset");
            }
            TabMode::Time => return,
        }
        self.after_transition(now);
    }

    /// Moves the countdown set-point by one adjust step.
    ///
    /// Only acts while the Timer tab is shown and the countdown is idle.
    pub fn adjust_timer(&mut self, increase: bool) {
        if self.tab != TabMode::Timer {
            return;
        }
        let step = i64::from(self.config.adjust_step_seconds);
        let delta = if increase { step } else { -step };
        if self.countdown.adjust(delta) {
            debug!(set_seconds = self.countdown.set_seconds(), "Countdown adjusted");
        }
    }

    /// Applies one input event.
    ///
    /// `tick_ms` is the loop time in milliseconds since startup; it drives the
    /// Start/Stop click cooldown.
    pub fn handle_input(&mut self, event: InputEvent, now: Instant, tick_ms: u64) {
        match event {
            InputEvent::Close => {
                debug!("Close requested");
                self.should_quit = true;
            }
            InputEvent::MouseDown(position) => self.handle_mouse_down(position, now, tick_ms),
            InputEvent::Key(Key::Toggle) => self.toggle_active(now),
            InputEvent::Key(Key::Reset) => self.reset_active(now),
            InputEvent::Key(Key::Up) => self.adjust_timer(true),
            InputEvent::Key(Key::Down) => self.adjust_timer(false),
        }
    }

    /// Silences the alarm before the application exits.
    pub fn shutdown(&mut self) {
        self.alarm.set_playing(false);
    }

    fn handle_mouse_down(&mut self, position: Position, now: Instant, tick_ms: u64) {
        match self.layout.hit(position, self.tab) {
            Some(Hit::Tab(tab)) => self.select_tab(tab),
            Some(Hit::ToggleButton) => {
                if self.cooldown.try_accept(tick_ms) {
                    self.toggle_active(now);
                } else {
                    debug!(tick_ms, "Start/Stop click within cooldown ignored");
                }
            }
            Some(Hit::ResetButton) => self.reset_active(now),
            None => {}
        }
    }

    /// Brings the alarm and the title color in line with the machines.
    fn after_transition(&mut self, now: Instant) {
        self.alarm.set_playing(self.countdown.is_alarming());

        let stopwatch_running = self.stopwatch.is_running();
        let countdown_running = self.countdown.is_running();
        if stopwatch_running || countdown_running {
            self.colors.start_if_needed(now);
        } else {
            self.colors.stop_if_idle(stopwatch_running, countdown_running);
        }
    }
}
