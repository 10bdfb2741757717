//! Coin list screen at `/`.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::query::QueryStatus;
use crate::ui::components::{render_status_indicator, StatusIndicatorType};
use crate::ui::theme::Palette;
use crate::view_state::CoinListView;

pub fn render(frame: &mut Frame, area: Rect, view: &CoinListView, palette: &Palette, tick: u64) {
    let [title_area, body_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    let title = vec![Line::from(""), Line::styled("Coins", palette.title())];
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), title_area);

    let query = view.query();
    match query.status() {
        QueryStatus::Loading => {
            let lines = render_status_indicator(
                &StatusIndicatorType::spinner("Loading...", tick as usize),
                palette,
            );
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body_area);
        }
        QueryStatus::Error => {
            let details = query.error().map(|e| e.user_message());
            let lines = render_status_indicator(
                &StatusIndicatorType::error("Could not load coins", details, None),
                palette,
            );
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body_area);
        }
        QueryStatus::Success if view.coins().is_empty() => {
            let lines = render_status_indicator(&StatusIndicatorType::info("No coins"), palette);
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body_area);
        }
        QueryStatus::Success => render_rows(frame, body_area, view, palette),
    }
}

fn render_rows(frame: &mut Frame, area: Rect, view: &CoinListView, palette: &Palette) {
    let items: Vec<ListItem> = view
        .coins()
        .iter()
        .map(|coin| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>4}  ", coin.rank), palette.dimmed()),
                Span::styled(
                    format!("{:<8}", coin.symbol),
                    Style::default().fg(palette.accent),
                ),
                Span::styled(coin.name.clone(), Style::default().fg(palette.fg)),
                Span::styled("  →", palette.dimmed()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_symbol("▶ ")
        .highlight_style(
            Style::default()
                .bg(palette.hover)
                .fg(palette.bg)
                .add_modifier(Modifier::BOLD),
        );
    let mut state = ListState::default().with_selected(Some(view.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}
