//! Translation of terminal events into application input.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;

/// Keys the application reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// SPACE: start/stop the active tab
    Toggle,
    /// R: reset the active tab
    Reset,
    /// UP: add time to an idle countdown
    Up,
    /// DOWN: remove time from an idle countdown
    Down,
}

/// A single input event, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Any mouse button pressed at a cell
    MouseDown(Position),
    Key(Key),
    /// The user asked to close the application
    Close,
}

impl InputEvent {
    /// Converts a terminal event; returns None for events the app ignores.
    pub fn from_crossterm(event: CrosstermEvent) -> Option<Self> {
        match event {
            CrosstermEvent::Key(key) => Self::from_key(key),
            CrosstermEvent::Mouse(mouse) => Self::from_mouse(mouse),
            _ => None,
        }
    }

    fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Some(InputEvent::Close),
                _ => None,
            };
        }
        let key = match key.code {
            KeyCode::Char(' ') => Key::Toggle,
            KeyCode::Char('r') | KeyCode::Char('R') => Key::Reset,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            _ => return None,
        };
        Some(InputEvent::Key(key))
    }

    fn from_mouse(mouse: MouseEvent) -> Option<Self> {
        match mouse.kind {
            MouseEventKind::Down(_) => Some(InputEvent::MouseDown(Position::new(
                mouse.column,
                mouse.row,
            ))),
            _ => None,
        }
    }
}
