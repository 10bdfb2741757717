//! Status Indicator Component
//!
//! Spinner, error and info lines shown in place of content.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::Palette;

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Status indicator types
#[derive(Debug, Clone)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner { message: String, frame: usize },
    /// Error header with optional details and hint
    Error {
        header: String,
        details: Option<String>,
        hint: Option<String>,
    },
    /// Plain info message
    Info { message: String },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, frame: usize) -> Self {
        Self::Spinner {
            message: message.into(),
            frame,
        }
    }

    pub fn error(header: impl Into<String>, details: Option<String>, hint: Option<String>) -> Self {
        Self::Error {
            header: header.into(),
            details,
            hint,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Info {
            message: message.into(),
        }
    }
}

/// Spinner character for an animation tick.
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Render a status indicator as lines, meant to be centered by the caller.
pub fn render_status_indicator(indicator: &StatusIndicatorType, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = vec![Line::from("")];

    match indicator {
        StatusIndicatorType::Spinner { message, frame } => {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", get_spinner_char(*frame)),
                    Style::default().fg(palette.pending),
                ),
                Span::styled(
                    message.clone(),
                    Style::default()
                        .fg(palette.pending)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }

        StatusIndicatorType::Error {
            header,
            details,
            hint,
        } => {
            lines.push(Line::from(vec![
                Span::styled("\u{2717} ", Style::default().fg(palette.error)),
                Span::styled(
                    header.clone(),
                    Style::default()
                        .fg(palette.error)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            if let Some(detail) = details {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    detail.clone(),
                    Style::default().fg(palette.fg),
                )));
            }
            if let Some(hint) = hint {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(hint.clone(), palette.dimmed())));
            }
        }

        StatusIndicatorType::Info { message } => {
            lines.push(Line::from(Span::styled(message.clone(), palette.dimmed())));
        }
    }

    lines
}
