//! Tab Selector Component
//!
//! A horizontal row of tabs. The active tab gets the `▶` marker and bold
//! text; at most one tab is active and possibly none.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::Palette;

/// A single tab item in the selector
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    pub id: &'a str,
    pub label: &'a str,
    /// Key that activates the tab, shown after the label
    pub key_hint: Option<char>,
}

impl<'a> TabItem<'a> {
    pub fn new(id: &'a str, label: &'a str) -> Self {
        Self {
            id,
            label,
            key_hint: None,
        }
    }

    pub fn with_key_hint(mut self, key: char) -> Self {
        self.key_hint = Some(key);
        self
    }
}

/// Render a horizontal tab selector.
///
/// ```ignore
/// let items = [TabItem::new("price", "Price"), TabItem::new("chart", "Chart")];
/// let line = render_tab_selector(&items, Some(0), palette, &ctx);
/// ```
pub fn render_tab_selector(
    items: &[TabItem<'_>],
    active: Option<usize>,
    palette: &Palette,
    ctx: &LayoutContext,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw("  ")];

    for (idx, item) in items.iter().enumerate() {
        if active == Some(idx) {
            spans.push(Span::styled(
                "▶ ".to_string(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                item.label.to_string(),
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                item.label.to_string(),
                Style::default().fg(palette.fg),
            ));
        }

        if let Some(key) = item.key_hint {
            if !ctx.is_extra_small() {
                spans.push(Span::styled(format!(" ({})", key), palette.dimmed()));
            }
        }

        if idx + 1 < items.len() {
            let spacing = if ctx.is_compact() { "  " } else { "      " };
            spans.push(Span::raw(spacing));
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DARK;

    fn items() -> Vec<TabItem<'static>> {
        vec![
            TabItem::new("price", "Price").with_key_hint('p'),
            TabItem::new("chart", "Chart").with_key_hint('c'),
        ]
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_no_active_tab_has_no_marker() {
        let line = render_tab_selector(&items(), None, &DARK, &LayoutContext::new(100, 40));
        let text = text(&line);
        assert!(!text.contains('▶'));
        assert!(text.contains("Price"));
        assert!(text.contains("Chart"));
    }

    #[test]
    fn test_second_active() {
        let line = render_tab_selector(&items(), Some(1), &DARK, &LayoutContext::new(100, 40));
        let text = text(&line);
        let marker = text.find('▶').unwrap();
        assert!(marker > text.find("Price").unwrap());
        assert!(marker < text.find("Chart").unwrap());
        assert_eq!(text.matches('▶').count(), 1);
    }

    #[test]
    fn test_key_hints_hidden_when_tiny() {
        let line = render_tab_selector(&items(), Some(0), &DARK, &LayoutContext::new(30, 10));
        assert!(!text(&line).contains("(p)"));
        let line = render_tab_selector(&items(), Some(0), &DARK, &LayoutContext::new(100, 40));
        assert!(text(&line).contains("(p)"));
    }
}
