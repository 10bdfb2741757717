//! Color palettes for the dark and light themes.

use ratatui::style::{Color, Modifier, Style};

use crate::state::ThemeState;

/// Every color the UI draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub bg: Color,
    /// Body text
    pub fg: Color,
    /// Hints and secondary text
    pub dim: Color,
    /// Titles, active tab, selection marker
    pub accent: Color,
    /// Box borders
    pub border: Color,
    /// Background of overview boxes and tabs
    pub box_bg: Color,
    /// Selected list row
    pub hover: Color,
    /// Positive changes
    pub up: Color,
    /// Negative changes
    pub down: Color,
    /// Spinner
    pub pending: Color,
    pub error: Color,
}

pub const DARK: Palette = Palette {
    bg: Color::Rgb(47, 54, 64),
    fg: Color::Rgb(245, 246, 250),
    dim: Color::Rgb(127, 143, 166),
    accent: Color::Rgb(251, 197, 49),
    border: Color::Rgb(83, 92, 104),
    box_bg: Color::Rgb(30, 39, 46),
    hover: Color::Rgb(180, 188, 220),
    up: Color::Rgb(76, 209, 55),
    down: Color::Rgb(232, 65, 24),
    pending: Color::Yellow,
    error: Color::Red,
};

pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(245, 246, 250),
    fg: Color::Rgb(47, 54, 64),
    dim: Color::Rgb(113, 128, 147),
    accent: Color::Rgb(0, 151, 230),
    border: Color::Rgb(200, 204, 214),
    box_bg: Color::Rgb(255, 255, 255),
    hover: Color::Rgb(180, 188, 220),
    up: Color::Rgb(39, 174, 96),
    down: Color::Rgb(192, 57, 43),
    pending: Color::Rgb(225, 112, 85),
    error: Color::Rgb(192, 57, 43),
};

impl Palette {
    pub fn for_theme(theme: ThemeState) -> &'static Palette {
        if theme.is_dark() {
            &DARK
        } else {
            &LIGHT
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn dimmed(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Up color for non-negative values, down color otherwise.
    pub fn change(&self, value: f64) -> Style {
        if value >= 0.0 {
            Style::default().fg(self.up)
        } else {
            Style::default().fg(self.down)
        }
    }
}
