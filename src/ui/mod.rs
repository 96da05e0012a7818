//! Drawing of the tab bar and the active page.

pub mod layout;
pub mod theme;

use std::time::Instant;

use chrono::NaiveTime;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tui_big_text::{BigText, PixelSize};

use crate::app::App;
use crate::types::TabMode;

pub use layout::{Hit, ScreenLayout};
pub use theme::Theme;

/// Draws one frame and returns the layout it was drawn with.
///
/// The returned layout is what later mouse-downs are hit-tested against.
pub fn render(frame: &mut Frame, app: &App, now: Instant, wall_clock: NaiveTime) -> ScreenLayout {
    let layout = ScreenLayout::compute(frame.area());

    frame.render_widget(Block::default().style(Theme::background()), layout.area);
    render_tabs(frame, &layout, app.tab());

    let title = Paragraph::new(app.tab().label()).style(Theme::title(app.title_color()));
    frame.render_widget(title, layout.title);

    match app.tab() {
        TabMode::Stopwatch => {
            let stopwatch = app.stopwatch();
            render_readout(frame, layout.readout, stopwatch.display(now), Theme::readout());
            render_controls(frame, &layout, stopwatch.is_running());
        }
        TabMode::Timer => {
            let countdown = app.countdown();
            let style = if countdown.is_alarming() {
                Theme::readout_alarming()
            } else {
                Theme::readout()
            };
            render_readout(frame, layout.readout, countdown.display(now), style);
            render_controls(frame, &layout, countdown.is_running());
        }
        TabMode::Time => {
            let text = wall_clock.format("%H:%M:%S").to_string();
            render_readout(frame, layout.readout, text, Theme::readout());
        }
    }

    if let Some(hint) = app.tab().hint() {
        let hint = Paragraph::new(hint).style(Theme::hint()).alignment(Alignment::Center);
        frame.render_widget(hint, layout.hint);
    }

    layout
}

fn render_tabs(frame: &mut Frame, layout: &ScreenLayout, active: TabMode) {
    for (tab, area) in TabMode::ALL.into_iter().zip(layout.tabs) {
        let style = if tab == active {
            Theme::tab_active()
        } else {
            Theme::tab()
        };
        render_button(frame, area, tab.label(), style);
    }
}

fn render_controls(frame: &mut Frame, layout: &ScreenLayout, running: bool) {
    let label = if running { "Stop" } else { "Start" };
    render_button(frame, layout.toggle_button, label, Theme::button());
    render_button(frame, layout.reset_button, "Reset", Theme::button());
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, style: Style) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border());
    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(button, area);
}

fn render_readout(frame: &mut Frame, area: Rect, text: String, style: Style) {
    frame.render_widget(big_readout(text, style), area);
}

/// Half-height block glyphs: four rows tall, eight columns per character.
fn big_readout(text: String, style: Style) -> BigText<'static> {
    BigText::builder()
        .pixel_size(PixelSize::HalfHeight)
        .style(style)
        .alignment(Alignment::Center)
        .lines(vec![Line::from(text)])
        .build()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    use super::*;
    use crate::sound::{Alarm, MockSoundPlayer, SoundSource};
    use crate::types::AppConfig;

    fn app() -> App {
        let mock = Arc::new(MockSoundPlayer::new());
        let alarm = Alarm::new(
            Box::new(mock),
            SoundSource::from_bytes("alarm", vec![0u8; 8]),
        );
        App::new(AppConfig::default(), alarm, Rect::new(0, 0, 80, 24))
    }

    fn rows(buffer: &Buffer, area: Rect) -> Vec<String> {
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn draw(app: &App, now: Instant) -> (Buffer, ScreenLayout) {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut layout = None;
        let wall = NaiveTime::from_hms_opt(13, 37, 42).unwrap();
        terminal
            .draw(|frame| layout = Some(render(frame, app, now, wall)))
            .unwrap();
        (terminal.backend().buffer().clone(), layout.unwrap())
    }

    fn screen_text(buffer: &Buffer) -> String {
        rows(buffer, buffer.area).join("\n")
    }

    /// The readout rows as they look when `text` is drawn in big glyphs.
    fn big_rows(text: &str, area: Rect) -> Vec<String> {
        let mut buffer = Buffer::empty(area);
        big_readout(text.to_string(), Theme::readout()).render(area, &mut buffer);
        rows(&buffer, area)
    }

    fn assert_readout(buffer: &Buffer, layout: &ScreenLayout, expected: &str) {
        assert_eq!(rows(buffer, layout.readout), big_rows(expected, layout.readout));
    }

    #[test]
    fn test_stopwatch_page() {
        let app = app();
        let (buffer, layout) = draw(&app, Instant::now());
        let text = screen_text(&buffer);

        assert!(text.contains("Stopwatch"));
        assert!(text.contains("Timer"));
        assert!(text.contains("Time"));
        assert!(text.contains("Start"));
        assert!(text.contains("Reset"));
        assert!(text.contains("SPACE start/stop | R reset"));
        assert_readout(&buffer, &layout, "00:00.00");
    }

    #[test]
    fn test_readout_spans_several_rows() {
        let app = app();
        let (buffer, layout) = draw(&app, Instant::now());

        let inked_rows = rows(&buffer, layout.readout)
            .iter()
            .filter(|row| !row.trim().is_empty())
            .count();

        assert!(inked_rows > 1, "readout drawn on {} row(s)", inked_rows);
        assert!(!screen_text(&buffer).contains("00:00.00"));
    }

    #[test]
    fn test_running_stopwatch_shows_stop() {
        let mut app = app();
        let t0 = Instant::now();
        app.toggle_active(t0);

        let (buffer, layout) = draw(&app, t0 + Duration::from_millis(1_500));

        assert!(screen_text(&buffer).contains("Stop "));
        assert_readout(&buffer, &layout, "00:01.50");
    }

    #[test]
    fn test_timer_page() {
        let mut app = app();
        app.select_tab(TabMode::Timer);

        let (buffer, layout) = draw(&app, Instant::now());

        assert!(screen_text(&buffer).contains("UP/DOWN adjust"));
        assert_readout(&buffer, &layout, "01:00");
    }

    #[test]
    fn test_time_page_has_no_buttons() {
        let mut app = app();
        app.select_tab(TabMode::Time);

        let (buffer, layout) = draw(&app, Instant::now());
        let text = screen_text(&buffer);

        assert_readout(&buffer, &layout, "13:37:42");
        assert!(!text.contains("Start"));
        assert!(!text.contains("Reset"));
    }

    #[test]
    fn test_render_returns_layout_for_frame() {
        let app = app();
        let (_, layout) = draw(&app, Instant::now());
        assert_eq!(layout, ScreenLayout::compute(Rect::new(0, 0, 80, 24)));
    }
}
