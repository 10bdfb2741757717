//! Control bar: Back link on the left, theme toggle on the right.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::ThemeState;
use crate::ui::theme::Palette;

/// Back link text, absent at `/`.
pub fn back_line(is_root: bool, palette: &Palette) -> Line<'static> {
    if is_root {
        return Line::from("");
    }
    Line::from(vec![
        Span::styled(
            "◀ Back",
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" (b)", palette.dimmed()),
    ])
}

/// Toggle reflecting the theme flag: the knob sits on the active side.
pub fn toggle_line(theme: ThemeState, palette: &Palette) -> Line<'static> {
    let (knob, label) = if theme.is_dark() {
        ("[☾ ●]", "Dark")
    } else {
        ("[● ☀]", "Light")
    };
    Line::from(vec![
        Span::styled(format!("{} ", knob), Style::default().fg(palette.accent)),
        Span::styled(label, Style::default().fg(palette.fg)),
        Span::styled(" (t)", palette.dimmed()),
    ])
}

pub fn render(frame: &mut Frame, area: Rect, is_root: bool, theme: ThemeState, palette: &Palette) {
    frame.render_widget(Paragraph::new(back_line(is_root, palette)), area);
    frame.render_widget(
        Paragraph::new(toggle_line(theme, palette)).alignment(Alignment::Right),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DARK;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_back_hidden_at_root() {
        assert_eq!(text(&back_line(true, &DARK)), "");
        assert!(text(&back_line(false, &DARK)).contains("Back"));
    }

    #[test]
    fn test_toggle_reflects_flag() {
        let mut theme = ThemeState::new(true);
        assert!(text(&toggle_line(theme, &DARK)).contains("Dark"));
        theme.toggle();
        assert!(text(&toggle_line(theme, &DARK)).contains("Light"));
    }
}
