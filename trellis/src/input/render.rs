//! Input widget rendering.
//!
//! Builds up to three lines: label, field (value or placeholder, with a
//! cursor cell when focused), and error or helper text.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::state::Input;

/// Character used for masked values.
const MASK_CHAR: char = '•';

/// Build the field line: value (masked if configured) or dim
/// placeholder, with the cursor cell highlighted when focused.
pub fn field_line(input: &Input, focused: bool) -> Line<'static> {
    let value = input.value();
    let disabled = input.is_disabled();

    let base = if disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    if value.is_empty() {
        let placeholder = input.placeholder_text();
        let mut spans = Vec::new();
        if focused && !disabled {
            spans.push(Span::styled(" ".to_string(), cursor_style()));
        }
        spans.push(Span::styled(
            placeholder,
            Style::default().fg(Color::DarkGray),
        ));
        return Line::from(spans);
    }

    let display: String = if input.is_masked() {
        value.chars().map(|_| MASK_CHAR).collect()
    } else {
        value.clone()
    };

    if !focused || disabled {
        return Line::from(Span::styled(display, base));
    }

    // Split around the cursor so the cell under it can be highlighted.
    // The cursor byte offset in `value` maps to a char position, which is
    // what indexes the (possibly masked) display string.
    let cursor_chars = value[..input.cursor()].chars().count();
    let before: String = display.chars().take(cursor_chars).collect();
    let at: String = display
        .chars()
        .nth(cursor_chars)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let after: String = display.chars().skip(cursor_chars + 1).collect();

    Line::from(vec![
        Span::styled(before, base),
        Span::styled(at, cursor_style()),
        Span::styled(after, base),
    ])
}

/// Build all lines for the input: optional label, the field, and the
/// error or helper line when present.
pub fn build_lines(input: &Input, focused: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(3);

    let label = input.label_text();
    if !label.is_empty() {
        let style = if input.is_invalid() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(Span::styled(label, style)));
    }

    lines.push(field_line(input, focused));

    if let Some(error) = input.error() {
        lines.push(Line::from(Span::styled(
            error,
            Style::default().fg(Color::Red),
        )));
    } else {
        let helper = input.helper_text();
        if !helper.is_empty() {
            lines.push(Line::from(Span::styled(
                helper,
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    lines
}

/// Render the input into a frame area.
pub fn render(frame: &mut Frame, input: &Input, area: Rect, focused: bool) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let paragraph = Paragraph::new(build_lines(input, focused));
    frame.render_widget(paragraph, area);
    input.clear_dirty();
}

fn cursor_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}
