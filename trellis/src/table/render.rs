//! Table widget rendering.
//!
//! Line builders are pure functions over the computed state so they can
//! be tested without a terminal; `render` is the thin glue that hands
//! them to a ratatui frame.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::selection::SelectionMode;

use super::item::{Alignment, Column, TableRow};
use super::sort::{SortDirection, SortSpec};
use super::state::Table;

/// Text shown while the loading flag is set.
pub const LOADING_TEXT: &str = "Loading...";
/// Text shown for an empty table.
pub const EMPTY_TEXT: &str = "No data available";

/// Cursor row background (bright purple).
const CURSOR_BG: Color = Color::Rgb(0xA2, 0x77, 0xFF);
/// Selected row background (dim purple).
const SELECTED_BG: Color = Color::Rgb(0x6E, 0x54, 0x94);

/// Build the header line: checkbox column (when selection is enabled)
/// followed by column titles with sort indicators.
pub fn header_line<T: TableRow>(table: &Table<T>) -> Line<'static> {
    let columns = table.columns();
    let sort = table.sort();
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::with_capacity(columns.len() + 1);
    if table.selection_mode() != SelectionMode::None {
        spans.push(Span::styled(
            T::selection_indicator(table.all_selected()).to_string(),
            header_style,
        ));
    }
    for col in &columns {
        spans.push(Span::styled(
            fit(&header_text(col, sort.as_ref()), col.width as usize, col.align),
            header_style,
        ));
    }
    Line::from(spans)
}

/// Build one data row line by view index.
pub fn row_line<T: TableRow>(table: &Table<T>, view_index: usize) -> Option<Line<'static>> {
    let row = table.view_row(view_index)?;
    let columns = table.columns();
    let selected = table.is_selected(&row.key());
    let focused = table.cursor() == Some(view_index);

    let style = if focused {
        Style::default().bg(CURSOR_BG).fg(Color::Black)
    } else if selected {
        Style::default().bg(SELECTED_BG).fg(Color::Black)
    } else {
        Style::default()
    };

    let mut spans = Vec::with_capacity(columns.len() + 1);
    if table.selection_mode() != SelectionMode::None {
        spans.push(Span::styled(
            T::selection_indicator(selected).to_string(),
            style,
        ));
    }
    for col in &columns {
        spans.push(Span::styled(
            fit(&row.cell(&col.id), col.width as usize, col.align),
            style,
        ));
    }
    Some(Line::from(spans))
}

/// Build all visible lines for the table: header, then loading/empty
/// placeholder or the visible slice of data rows.
pub fn build_lines<T: TableRow>(table: &Table<T>) -> Vec<Line<'static>> {
    let mut lines = vec![header_line(table)];

    if table.loading() {
        lines.push(Line::from(Span::styled(
            LOADING_TEXT,
            Style::default().fg(Color::DarkGray),
        )));
        return lines;
    }
    if table.is_empty() {
        lines.push(Line::from(Span::styled(
            EMPTY_TEXT,
            Style::default().fg(Color::DarkGray),
        )));
        return lines;
    }

    for view_index in table.visible_row_range() {
        if let Some(line) = row_line(table, view_index) {
            lines.push(line);
        }
    }
    lines
}

/// Render the table into a frame area.
pub fn render<T: TableRow>(frame: &mut Frame, table: &Table<T>, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    table.set_viewport_height(area.height);
    let paragraph = Paragraph::new(build_lines(table));
    frame.render_widget(paragraph, area);
    table.clear_dirty();
}

/// Header text for a column, with its sort indicator when sortable.
fn header_text(col: &Column, sort: Option<&SortSpec>) -> String {
    if !col.sortable {
        return col.title.clone();
    }
    let indicator = match sort {
        Some(spec) if spec.column == col.id => match spec.direction {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        },
        _ => "↕",
    };
    match col.align {
        Alignment::Right => format!("{} {}", indicator, col.title),
        _ => format!("{} {}", col.title, indicator),
    }
}

/// Fit text into a column: truncate by display width with an ellipsis,
/// then pad per the alignment. The result always occupies exactly
/// `width` terminal columns.
fn fit(text: &str, width: usize, align: Alignment) -> String {
    if width == 0 {
        return String::new();
    }
    let text = if UnicodeWidthStr::width(text) > width {
        truncate_to_width(text, width)
    } else {
        text.to_string()
    };
    let pad = width.saturating_sub(UnicodeWidthStr::width(text.as_str()));
    match align {
        Alignment::Left => format!("{}{}", text, " ".repeat(pad)),
        Alignment::Right => format!("{}{}", " ".repeat(pad), text),
        Alignment::Center => {
            let left = pad / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
        }
    }
}

/// Truncate to at most `width` terminal columns, appending "..." when
/// there is room for it.
fn truncate_to_width(text: &str, width: usize) -> String {
    let ellipsis = if width > 3 { "..." } else { "" };
    let budget = width - ellipsis.len();
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ellipsis);
    out
}
