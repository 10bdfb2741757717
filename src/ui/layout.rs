//! Responsive layout helpers.
//!
//! Content lives in a centered column so wide terminals read like the
//! narrow card the views are designed for.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal width breakpoints
pub mod breakpoints {
    /// Extra small terminal (< 40 columns)
    pub const XS_WIDTH: u16 = 40;
    /// Small terminal (< 60 columns)
    pub const SM_WIDTH: u16 = 60;
    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
}

/// Widest the content column gets.
pub const MAX_CONTENT_WIDTH: u16 = 72;

/// Horizontal padding on each side of the content column.
pub const CONTENT_PADDING: u16 = 2;

/// Terminal dimensions for responsive decisions.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Short labels and tighter spacing below this size.
    pub fn is_compact(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }
}

/// Centered column of at most [`MAX_CONTENT_WIDTH`], padded on both sides.
pub fn content_area(area: Rect) -> Rect {
    let padded = area.width.saturating_sub(CONTENT_PADDING * 2);
    let width = padded.min(MAX_CONTENT_WIDTH);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Greedy word wrap of `text` at `width` display columns.
///
/// Words are joined by single spaces; a word wider than a row is split
/// across rows. Blank lines between paragraphs are kept.
pub fn wrap_words(text: &str, width: u16) -> Vec<String> {
    let width = width as usize;
    if width == 0 || text.trim().is_empty() {
        return Vec::new();
    }

    let mut rows = Vec::new();
    for paragraph in text.trim().lines() {
        let mut row = String::new();
        let mut row_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = UnicodeWidthStr::width(word);
            if row_width > 0 && row_width + 1 + word_width <= width {
                row.push(' ');
                row.push_str(word);
                row_width += 1 + word_width;
                continue;
            }
            if row_width > 0 {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            for ch in word.chars() {
                let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                if row_width > 0 && row_width + ch_width > width {
                    rows.push(std::mem::take(&mut row));
                    row_width = 0;
                }
                row.push(ch);
                row_width += ch_width;
            }
        }
        rows.push(row);
    }
    rows
}

/// Keep at most `max_rows` of `rows`. When rows are dropped the last kept
/// row ends in `…`, shortened to stay within `width`.
pub fn clamp_rows(mut rows: Vec<String>, max_rows: usize, width: u16) -> Vec<String> {
    if rows.len() <= max_rows {
        return rows;
    }
    rows.truncate(max_rows);
    if let Some(last) = rows.last_mut() {
        let limit = (width as usize).saturating_sub(1);
        let mut last_width = UnicodeWidthStr::width(last.as_str());
        while last_width > limit {
            match last.pop() {
                Some(ch) => last_width -= UnicodeWidthChar::width(ch).unwrap_or(0),
                None => break,
            }
        }
        last.truncate(last.trim_end().len());
        last.push('…');
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_area_is_centered_and_capped() {
        let area = content_area(Rect::new(0, 0, 200, 50));
        assert_eq!(area.width, MAX_CONTENT_WIDTH);
        assert_eq!(area.x, (200 - MAX_CONTENT_WIDTH) / 2);
        assert_eq!(area.height, 50);

        let narrow = content_area(Rect::new(0, 0, 40, 20));
        assert_eq!(narrow.width, 36);
        assert_eq!(narrow.x, 2);
    }

    #[test]
    fn test_content_area_tiny_terminal() {
        let area = content_area(Rect::new(0, 0, 3, 3));
        assert_eq!(area.width, 0);
    }

    #[test]
    fn test_wrap_words_breaks_between_words() {
        assert!(wrap_words("", 10).is_empty());
        assert!(wrap_words("   ", 10).is_empty());
        assert!(wrap_words("abcd", 0).is_empty());
        assert_eq!(wrap_words("abcd", 10), vec!["abcd"]);
        assert_eq!(wrap_words("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_words("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_words_needs_more_rows_than_character_count() {
        // 66 columns of text, yet no two 20-column words share a 36-column row
        let text = format!("{} {} {} zzzz", "a".repeat(20), "b".repeat(20), "c".repeat(20));
        let rows = wrap_words(&text, 36);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], format!("{} zzzz", "c".repeat(20)));
    }

    #[test]
    fn test_wrap_words_splits_long_words() {
        let rows = wrap_words(&"x".repeat(25), 10);
        assert_eq!(rows, vec!["x".repeat(10), "x".repeat(10), "x".repeat(5)]);
    }

    #[test]
    fn test_clamp_rows_marks_dropped_text() {
        let rows = vec!["alpha beta".to_string(), "gamma".to_string(), "delta".to_string()];
        assert_eq!(clamp_rows(rows.clone(), 3, 10), rows);
        assert_eq!(clamp_rows(rows.clone(), 2, 10), vec!["alpha beta", "gamma…"]);
        assert_eq!(clamp_rows(rows.clone(), 1, 10), vec!["alpha bet…"]);
        assert!(clamp_rows(rows, 0, 10).is_empty());
    }

    #[test]
    fn test_breakpoints() {
        assert!(LayoutContext::new(50, 30).is_compact());
        assert!(!LayoutContext::new(80, 30).is_compact());
        assert!(LayoutContext::new(80, 10).is_extra_small());
    }
}
