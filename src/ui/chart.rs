//! Chart tab: one horizontal bar per change window.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::format::format_percent;
use crate::models::UsdQuote;
use crate::ui::theme::Palette;

const LABEL_WIDTH: usize = 5;
const VALUE_WIDTH: usize = 10;
const BAR: char = '█';

/// Bar length for `value` when `max_abs` fills `width` cells.
pub fn bar_len(value: f64, max_abs: f64, width: usize) -> usize {
    if width == 0 || max_abs <= 0.0 || !value.is_finite() {
        return 0;
    }
    let len = (value.abs() / max_abs * width as f64).round() as usize;
    // Any non-zero change stays visible
    if len == 0 && value != 0.0 {
        1
    } else {
        len.min(width)
    }
}

/// Chart lines for `quote` at `width` columns.
pub fn chart_lines(quote: Option<&UsdQuote>, width: u16, palette: &Palette) -> Vec<Line<'static>> {
    let Some(q) = quote else {
        return vec![Line::styled("No quote yet", palette.dimmed())];
    };
    let windows = q.change_windows();
    let max_abs = windows
        .iter()
        .map(|(_, v)| v.abs())
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    let bar_width = (width as usize).saturating_sub(LABEL_WIDTH + VALUE_WIDTH + 1);

    windows
        .iter()
        .map(|(label, value)| {
            let style = palette.change(*value);
            let len = bar_len(*value, max_abs, bar_width);
            Line::from(vec![
                Span::styled(format!("{:<width$}", label, width = LABEL_WIDTH), palette.dimmed()),
                Span::styled(BAR.to_string().repeat(len), style),
                Span::raw(" ".repeat(bar_width - len + 1)),
                Span::styled(format!("{:>width$}", format_percent(*value), width = VALUE_WIDTH), style),
            ])
        })
        .collect()
}

pub fn render(frame: &mut Frame, area: Rect, quote: Option<&UsdQuote>, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.box_bg));
    let inner_width = block.inner(area).width;
    frame.render_widget(
        Paragraph::new(chart_lines(quote, inner_width, palette)).block(block),
        area,
    );
}
