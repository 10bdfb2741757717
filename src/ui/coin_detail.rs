//! Coin detail screen: header, overview, tabs and the routed tab below.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::format::format_supply;
use crate::query::QueryKind;
use crate::router::CoinTab;
use crate::ui::components::{
    render_overview_box, render_status_indicator, render_tab_selector, StatusIndicatorType, TabItem,
    OVERVIEW_BOX_HEIGHT,
};
use crate::ui::layout::{clamp_rows, wrap_words, LayoutContext};
use crate::ui::theme::Palette;
use crate::ui::{chart, price};
use crate::view_state::{CoinDetailView, DetailPhase};

/// Rows of a ready screen besides the description: header, both overview
/// boxes with their gaps, and the tab strip with its gaps.
const READY_FIXED_ROWS: u16 = 3 + OVERVIEW_BOX_HEIGHT * 2 + 2 + 3;

/// Rows kept free for the routed tab when one is open.
const MIN_OUTLET_ROWS: u16 = 6;

fn tab_key(tab: CoinTab) -> char {
    match tab {
        CoinTab::Price => 'p',
        CoinTab::Chart => 'c',
    }
}

fn failed_header(query: QueryKind) -> &'static str {
    match query {
        QueryKind::Info => "Could not load coin info",
        QueryKind::Tickers => "Could not load prices",
        QueryKind::CoinList => "Could not load coins",
    }
}

/// When the shown snapshot arrived, or why the last refresh failed.
fn freshness_line(view: &CoinDetailView, palette: &Palette) -> Line<'static> {
    if let Some(error) = view.last_error() {
        return Line::styled(
            format!("Refresh failed: {}", error.user_message()),
            Style::default().fg(palette.error),
        );
    }
    match view.tickers().updated_at() {
        Some(at) => Line::styled(format!("Updated {}", at.format("%H:%M:%S UTC")), palette.dimmed()),
        None => Line::from(""),
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: &CoinDetailView,
    pathname: &str,
    palette: &Palette,
    tick: u64,
) {
    let ctx = LayoutContext::from_rect(area);
    let phase = view.phase();

    let active = CoinTab::active(pathname);

    // The whole description when it fits, else cut with an ellipsis
    let description = match phase {
        DetailPhase::Ready { info, .. } => {
            let reserved = READY_FIXED_ROWS + if active.is_some() { MIN_OUTLET_ROWS } else { 0 };
            let budget = area.height.saturating_sub(reserved) as usize;
            clamp_rows(wrap_words(info.description_text(), area.width), budget, area.width)
        }
        _ => Vec::new(),
    };
    let desc_rows = description.len() as u16;
    let body_rows = match phase {
        DetailPhase::Loading => 3,
        DetailPhase::Failed { .. } => 7,
        DetailPhase::Ready { .. } => OVERVIEW_BOX_HEIGHT * 2 + desc_rows + 2,
    };

    let [title_area, body_area, _, tabs_area, _, outlet_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(body_rows),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let mut title = vec![Line::from(""), Line::styled(view.header_title(), palette.title())];
    if matches!(phase, DetailPhase::Ready { .. }) {
        title.push(freshness_line(view, palette));
    }
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), title_area);

    match phase {
        DetailPhase::Loading => {
            let lines = render_status_indicator(
                &StatusIndicatorType::spinner("Loading...", tick as usize),
                palette,
            );
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body_area);
        }
        DetailPhase::Failed { query, error } => {
            let indicator = StatusIndicatorType::error(
                failed_header(query),
                Some(error.user_message()),
                Some(format!("{} Press b to go back.", error.category().recovery_hint())),
            );
            let lines = render_status_indicator(&indicator, palette);
            frame.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                body_area,
            );
        }
        DetailPhase::Ready { info, tickers } => {
            let [top, _, desc, _, bottom] = Layout::vertical([
                Constraint::Length(OVERVIEW_BOX_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(desc_rows),
                Constraint::Length(1),
                Constraint::Length(OVERVIEW_BOX_HEIGHT),
            ])
            .areas(body_area);

            render_overview_box(
                frame,
                top,
                &[
                    ("RANK", info.rank.to_string()),
                    ("SYMBOL", info.symbol.clone()),
                    ("PRICE", view.price_text().unwrap_or_else(|| "-".to_string())),
                ],
                palette,
            );
            frame.render_widget(
                Paragraph::new(description.into_iter().map(Line::from).collect::<Vec<_>>())
                    .style(Style::default().fg(palette.fg)),
                desc,
            );
            render_overview_box(
                frame,
                bottom,
                &[
                    ("TOTAL SUPPLY", format_supply(tickers.total_supply)),
                    ("MAX SUPPLY", format_supply(tickers.max_supply)),
                ],
                palette,
            );
        }
    }

    // Tabs show in every phase; the routed tab gets the quote, if any.
    let items: Vec<TabItem> = CoinTab::ALL
        .iter()
        .map(|tab| TabItem::new(tab.segment(), tab.label()).with_key_hint(tab_key(*tab)))
        .collect();
    let active_idx = active.and_then(|t| CoinTab::ALL.iter().position(|x| *x == t));
    frame.render_widget(
        Paragraph::new(render_tab_selector(&items, active_idx, palette, &ctx)).alignment(Alignment::Center),
        tabs_area,
    );

    match active {
        Some(CoinTab::Price) => price::render(frame, outlet_area, view.quote(), palette),
        Some(CoinTab::Chart) => chart::render(frame, outlet_area, view.quote(), palette),
        None => {}
    }
}
