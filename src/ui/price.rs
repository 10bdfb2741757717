//! Price tab: market figures of the current USD quote.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::format::{format_date, format_percent, format_price, format_usd};
use crate::models::UsdQuote;
use crate::ui::theme::Palette;

const LABEL_WIDTH: usize = 14;

fn row(label: &str, value: String, value_style: Style, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<width$}", label, width = LABEL_WIDTH), palette.dimmed()),
        Span::styled(value, value_style),
    ])
}

/// Lines shown for `quote`; a single "No quote yet" line without one.
pub fn price_lines(quote: Option<&UsdQuote>, palette: &Palette) -> Vec<Line<'static>> {
    let Some(q) = quote else {
        return vec![Line::styled("No quote yet", palette.dimmed())];
    };
    let plain = Style::default().fg(palette.fg);

    let mut lines = vec![
        row("Price", format!("${}", format_price(q.price)), plain, palette),
        row("Market cap", format_usd(q.market_cap), plain, palette),
        row("24h volume", format_usd(q.volume_24h), plain, palette),
        row(
            "ATH price",
            q.ath_price.map(|p| format!("${}", format_price(p))).unwrap_or_else(|| "-".to_string()),
            plain,
            palette,
        ),
        row("ATH date", format_date(q.ath_date), plain, palette),
    ];
    match q.percent_from_price_ath {
        Some(pct) => lines.push(row("From ATH", format_percent(pct), palette.change(pct), palette)),
        None => lines.push(row("From ATH", "-".to_string(), plain, palette)),
    }
    lines.push(Line::from(""));
    for (label, pct) in [
        ("Change 1h", q.percent_change_1h),
        ("Change 24h", q.percent_change_24h),
        ("Change 7d", q.percent_change_7d),
    ] {
        lines.push(row(label, format_percent(pct), palette.change(pct), palette));
    }
    lines
}

pub fn render(frame: &mut Frame, area: Rect, quote: Option<&UsdQuote>, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.box_bg));
    frame.render_widget(Paragraph::new(price_lines(quote, palette)).block(block), area);
}
