use ratatui::style::{Color, Modifier, Style};

use crate::types::{TitleColor, PALETTE_LEN};

const BACKGROUND: Color = Color::Rgb(10, 10, 10);
const BUTTON_BG: Color = Color::Rgb(50, 50, 50);
const FOREGROUND: Color = Color::Rgb(255, 255, 255);

/// Title colors while something is running: red, yellow, green, blue.
pub const PALETTE: [Color; PALETTE_LEN] = [
    Color::Rgb(255, 0, 0),
    Color::Rgb(255, 255, 0),
    Color::Rgb(0, 255, 0),
    Color::Rgb(0, 0, 255),
];

pub struct Theme;

impl Theme {
    pub fn background() -> Style {
        Style::default().bg(BACKGROUND).fg(FOREGROUND)
    }

    pub fn border() -> Style {
        Style::default().fg(FOREGROUND)
    }

    pub fn button() -> Style {
        Style::default().bg(BUTTON_BG).fg(FOREGROUND)
    }

    pub fn tab() -> Style {
        Style::default().bg(BUTTON_BG).fg(FOREGROUND)
    }

    pub fn tab_active() -> Style {
        Self::tab().add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn title(color: TitleColor) -> Style {
        let fg = match color {
            TitleColor::Neutral => FOREGROUND,
            TitleColor::Palette(index) => PALETTE[index % PALETTE_LEN],
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    pub fn readout() -> Style {
        Style::default().fg(FOREGROUND).add_modifier(Modifier::BOLD)
    }

    pub fn readout_alarming() -> Style {
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK)
    }

    pub fn hint() -> Style {
        Style::default().fg(FOREGROUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_neutral_is_white() {
        assert_eq!(Theme::title(TitleColor::Neutral).fg, Some(FOREGROUND));
    }

    #[test]
    fn test_title_follows_palette() {
        assert_eq!(Theme::title(TitleColor::Palette(0)).fg, Some(Color::Rgb(255, 0, 0)));
        assert_eq!(Theme::title(TitleColor::Palette(3)).fg, Some(Color::Rgb(0, 0, 255)));
    }
}
