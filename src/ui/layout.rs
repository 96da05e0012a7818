//! Screen geometry and hit-testing.
//!
//! All positions are terminal cells. Tabs sit at fixed positions along the
//! top; the two buttons are anchored to the bottom center of the screen.

use ratatui::layout::{Position, Rect};

use crate::types::TabMode;

const TAB_LEFT: u16 = 2;
const TAB_TOP: u16 = 1;
const TAB_WIDTH: u16 = 16;
const TAB_HEIGHT: u16 = 3;
const TAB_GAP: u16 = 1;

const TITLE_TOP: u16 = 5;

const BUTTON_WIDTH: u16 = 14;
const BUTTON_HEIGHT: u16 = 3;
/// Distance from the bottom edge to the top of the buttons.
const BUTTON_BOTTOM_OFFSET: u16 = 5;
/// Gap between the buttons, split evenly around the center column.
const BUTTON_GAP: u16 = 2;

/// Rows of the big readout glyphs.
const READOUT_HEIGHT: u16 = 4;

/// What a mouse-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Tab(TabMode),
    ToggleButton,
    ResetButton,
}

/// Rectangles of every interactive and textual element on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub area: Rect,
    pub tabs: [Rect; 3],
    pub title: Rect,
    pub readout: Rect,
    pub toggle_button: Rect,
    pub reset_button: Rect,
    pub hint: Rect,
}

impl ScreenLayout {
    /// Lays out the screen for a terminal of the given size.
    ///
    /// Elements that do not fit are clipped to `area`; a fully clipped
    /// element has zero size and never registers a hit.
    pub fn compute(area: Rect) -> Self {
        let tabs = TabMode::ALL.map(|tab| {
            let x = area.x + TAB_LEFT + tab.index() as u16 * (TAB_WIDTH + TAB_GAP);
            Rect::new(x, area.y + TAB_TOP, TAB_WIDTH, TAB_HEIGHT).intersection(area)
        });

        let title = Rect::new(
            area.x + TAB_LEFT,
            area.y + TITLE_TOP,
            area.width.saturating_sub(TAB_LEFT * 2),
            1,
        )
        .intersection(area);

        let center_x = area.x + area.width / 2;
        let bottom = area.y + area.height;
        let button_y = bottom.saturating_sub(BUTTON_BOTTOM_OFFSET);
        let toggle_button = Rect::new(
            center_x.saturating_sub(BUTTON_WIDTH + BUTTON_GAP / 2),
            button_y,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
        .intersection(area);
        let reset_button = Rect::new(
            center_x + BUTTON_GAP / 2,
            button_y,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
        .intersection(area);

        let readout_y = (area.y + area.height / 2).saturating_sub(READOUT_HEIGHT);
        let readout = Rect::new(area.x, readout_y, area.width, READOUT_HEIGHT).intersection(area);

        let hint = Rect::new(area.x, bottom.saturating_sub(2), area.width, 1).intersection(area);

        Self {
            area,
            tabs,
            title,
            readout,
            toggle_button,
            reset_button,
            hint,
        }
    }

    /// Returns the tab under `position`, checked left to right.
    pub fn tab_at(&self, position: Position) -> Option<TabMode> {
        TabMode::ALL
            .into_iter()
            .zip(self.tabs)
            .find(|(_, rect)| rect.contains(position))
            .map(|(tab, _)| tab)
    }

    /// Hit-tests tabs first, then the buttons of the active tab.
    pub fn hit(&self, position: Position, active: TabMode) -> Option<Hit> {
        if let Some(tab) = self.tab_at(position) {
            return Some(Hit::Tab(tab));
        }
        if !active.has_controls() {
            return None;
        }
        if self.toggle_button.contains(position) {
            Some(Hit::ToggleButton)
        } else if self.reset_button.contains(position) {
            Some(Hit::ResetButton)
        } else {
            None
        }
    }
}
