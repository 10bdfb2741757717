//! Overview Box Component
//!
//! A rounded box with labelled values laid out in equal columns,
//! label on top and value below.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::Palette;

/// Rows the box needs: border, label, value, border.
pub const OVERVIEW_BOX_HEIGHT: u16 = 4;

/// Render `items` as `(LABEL, value)` columns inside a rounded box.
pub fn render_overview_box(frame: &mut Frame, area: Rect, items: &[(&str, String)], palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.box_bg).fg(palette.fg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if items.is_empty() {
        return;
    }
    let columns = Layout::horizontal(vec![Constraint::Fill(1); items.len()]).split(inner);
    for ((label, value), column) in items.iter().zip(columns.iter()) {
        let lines = vec![
            Line::styled(
                label.to_string(),
                Style::default().fg(palette.dim).add_modifier(Modifier::BOLD),
            ),
            Line::from(value.clone()),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), *column);
    }
}
