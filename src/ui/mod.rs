//! UI rendering.
//!
//! Every frame is drawn from scratch out of `&App`:
//! - Control bar (Back link, theme toggle)
//! - The routed screen: coin list, coin detail or not-found
//! - Key hints on the bottom row
//!
//! Content sits in a centered column (see [`layout::content_area`]).

mod chart;
mod coin_detail;
mod coin_list;
pub mod components;
mod control_bar;
pub mod layout;
mod price;
pub mod theme;

pub use layout::{breakpoints, LayoutContext};
pub use theme::{Palette, DARK, LIGHT};

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;
use crate::input::Screen;
use crate::ui::components::{render_status_indicator, StatusIndicatorType};

/// Render the whole UI for the current route.
pub fn render(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme());
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let content = layout::content_area(area);
    let [bar_area, _, body_area, hints_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(content);

    control_bar::render(frame, bar_area, app.router().is_root(), app.theme(), palette);

    match app.screen() {
        Screen::CoinList => coin_list::render(frame, body_area, app.coin_list(), palette, app.tick_count),
        Screen::CoinDetail => {
            if let Some(view) = app.coin_detail() {
                coin_detail::render(
                    frame,
                    body_area,
                    view,
                    &app.location().pathname,
                    palette,
                    app.tick_count,
                );
            }
        }
        Screen::NotFound => render_not_found(frame, body_area, palette),
    }

    frame.render_widget(
        Paragraph::new(key_hints(app.screen(), palette)).alignment(Alignment::Center),
        hints_area,
    );
}

fn render_not_found(frame: &mut Frame, area: Rect, palette: &Palette) {
    let indicator = StatusIndicatorType::error(
        "Page not found",
        None,
        Some("Press b to go back".to_string()),
    );
    frame.render_widget(
        Paragraph::new(render_status_indicator(&indicator, palette)).alignment(Alignment::Center),
        area,
    );
}

/// Bottom row of key hints for `screen`.
pub fn key_hints(screen: Screen, palette: &Palette) -> Line<'static> {
    let hints: &[(&str, &str)] = match screen {
        Screen::CoinList => &[("↑↓", "select"), ("enter", "open"), ("t", "theme"), ("q", "quit")],
        Screen::CoinDetail => &[("p", "price"), ("c", "chart"), ("b", "back"), ("t", "theme"), ("q", "quit")],
        Screen::NotFound => &[("b", "back"), ("q", "quit")],
    };
    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ·  ", palette.dimmed()));
        }
        spans.push(Span::styled(key.to_string(), palette.title()));
        spans.push(Span::styled(format!(" {}", action), palette.dimmed()));
    }
    Line::from(spans)
}
