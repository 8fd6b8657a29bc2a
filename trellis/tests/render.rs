//! Tests for the line builders behind table and input rendering. Lines
//! are flattened to plain text, so these run without a terminal.

use ratatui::text::Line;
use trellis::input::render as input_render;
use trellis::table::render as table_render;
use trellis::{CellValue, Column, Input, SelectionMode, Table, TableRow};

#[derive(Clone, Debug)]
struct Entry {
    id: u32,
    name: &'static str,
}

impl TableRow for Entry {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }

    fn value(&self, column_id: &str) -> CellValue {
        match column_id {
            "id" => self.id.into(),
            "name" => self.name.into(),
            _ => CellValue::Empty,
        }
    }
}

fn text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

fn sample_table() -> Table<Entry> {
    let columns = vec![
        Column::new("id", "ID").fixed(4),
        Column::new("name", "Name").fixed(12).sortable(),
    ];
    let rows = vec![
        Entry { id: 1, name: "Charlie" },
        Entry { id: 2, name: "Alice" },
    ];
    Table::with_rows(columns, rows)
}

// ============================================================================
// Table header
// ============================================================================

#[test]
fn test_header_shows_sort_indicators() {
    let table = sample_table();

    let header = text(&table_render::header_line(&table));
    assert!(header.contains("ID"));
    assert!(header.contains("Name ↕"), "unsorted sortable column: {header}");

    table.on_header_activate("name");
    let header = text(&table_render::header_line(&table));
    assert!(header.contains("Name ↑"), "ascending: {header}");

    table.on_header_activate("name");
    let header = text(&table_render::header_line(&table));
    assert!(header.contains("Name ↓"), "descending: {header}");
}

#[test]
fn test_header_checkbox_reflects_all_selected() {
    let table = sample_table().with_selection_mode(SelectionMode::Multiple);

    let header = text(&table_render::header_line(&table));
    assert!(header.starts_with("□ "), "nothing selected: {header}");

    table.select_all();
    let header = text(&table_render::header_line(&table));
    assert!(header.starts_with("■ "), "all selected: {header}");
}

#[test]
fn test_header_has_no_checkbox_without_selection() {
    let table = sample_table();
    let header = text(&table_render::header_line(&table));
    assert!(header.starts_with("ID"));
}

// ============================================================================
// Table rows
// ============================================================================

#[test]
fn test_row_lines_follow_view_order() {
    let table = sample_table();
    table.on_header_activate("name");

    let first = text(&table_render::row_line(&table, 0).unwrap());
    let second = text(&table_render::row_line(&table, 1).unwrap());
    assert!(first.contains("Alice"));
    assert!(second.contains("Charlie"));
    assert!(table_render::row_line(&table, 2).is_none());
}

#[test]
fn test_row_checkbox_marks_selected_rows() {
    let table = sample_table().with_selection_mode(SelectionMode::Multiple);
    table.toggle_select(&1);

    // Row with key 1 (Charlie) is first in the unsorted view.
    let selected = text(&table_render::row_line(&table, 0).unwrap());
    let unselected = text(&table_render::row_line(&table, 1).unwrap());
    assert!(selected.starts_with("■ "));
    assert!(unselected.starts_with("□ "));
}

#[test]
fn test_cells_are_padded_to_column_width() {
    let table = sample_table();
    let line = text(&table_render::row_line(&table, 0).unwrap());
    // id column (4) + name column (12)
    assert_eq!(line.chars().count(), 16);
    assert!(line.starts_with("1   "));
}

#[test]
fn test_long_cells_are_truncated_with_ellipsis() {
    let columns = vec![Column::new("name", "Name").fixed(6)];
    let rows = vec![Entry { id: 1, name: "Bartholomew" }];
    let table = Table::with_rows(columns, rows);

    let line = text(&table_render::row_line(&table, 0).unwrap());
    assert_eq!(line, "Bar...");
}

// ============================================================================
// Placeholders
// ============================================================================

#[test]
fn test_empty_table_shows_placeholder() {
    let columns = vec![Column::new("name", "Name").fixed(12)];
    let table: Table<Entry> = Table::new(columns);

    let lines = table_render::build_lines(&table);
    assert_eq!(lines.len(), 2);
    assert_eq!(text(&lines[1]), table_render::EMPTY_TEXT);
}

#[test]
fn test_loading_takes_precedence_over_rows() {
    let table = sample_table();
    table.set_loading(true);

    let lines = table_render::build_lines(&table);
    assert_eq!(lines.len(), 2);
    assert_eq!(text(&lines[1]), table_render::LOADING_TEXT);

    table.set_loading(false);
    let lines = table_render::build_lines(&table);
    assert_eq!(lines.len(), 3);
}

// ============================================================================
// Input
// ============================================================================

#[test]
fn test_input_placeholder_shows_when_empty() {
    let input = Input::new().placeholder("type here");
    let line = text(&input_render::field_line(&input, false));
    assert_eq!(line, "type here");
}

#[test]
fn test_input_value_replaces_placeholder() {
    let input = Input::with_value("hello").placeholder("type here");
    let line = text(&input_render::field_line(&input, false));
    assert_eq!(line, "hello");
}

#[test]
fn test_masked_input_renders_dots() {
    let input = Input::with_value("secret").masked();
    let line = text(&input_render::field_line(&input, false));
    assert_eq!(line, "••••••");

    input.toggle_reveal();
    let line = text(&input_render::field_line(&input, false));
    assert_eq!(line, "secret");
}

#[test]
fn test_focused_input_appends_a_cursor_cell() {
    let input = Input::with_value("ab");
    // Cursor sits past the end after set_value; a space stands in for it.
    let line = text(&input_render::field_line(&input, true));
    assert_eq!(line, "ab ");
}

#[test]
fn test_build_lines_stacks_label_field_and_helper() {
    let input = Input::with_value("x")
        .label("Name")
        .helper("as on your passport");
    let lines = input_render::build_lines(&input, false);
    let texts: Vec<String> = lines.iter().map(text).collect();
    assert_eq!(texts, vec!["Name", "x", "as on your passport"]);
}

#[test]
fn test_error_replaces_helper_text() {
    let input = Input::with_value("x").label("Name").helper("helper");
    input.set_error("required");

    let lines = input_render::build_lines(&input, false);
    let texts: Vec<String> = lines.iter().map(text).collect();
    assert_eq!(texts, vec!["Name", "x", "required"]);
}
