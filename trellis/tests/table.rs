//! Integration tests for the Table widget: sorting through header
//! activation, selection through checkboxes and keys, event delivery, and
//! row replacement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use trellis::{
    CellValue, Column, EventResult, SelectionMode, SortDirection, SortSpec, Table, TableEvent,
    TableRow,
};

#[derive(Clone, Debug, PartialEq)]
struct User {
    id: u32,
    name: &'static str,
    age: i64,
}

impl User {
    fn new(id: u32, name: &'static str, age: i64) -> Self {
        Self { id, name, age }
    }
}

impl TableRow for User {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }

    fn value(&self, column_id: &str) -> CellValue {
        match column_id {
            "name" => self.name.into(),
            "age" => self.age.into(),
            _ => CellValue::Empty,
        }
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name").fixed(12).sortable(),
        Column::new("age", "Age").fixed(6).sortable(),
        Column::new("notes", "Notes").fixed(10),
    ]
}

fn users() -> Vec<User> {
    vec![
        User::new(1, "Charlie", 35),
        User::new(2, "Alice", 30),
        User::new(3, "Bob", 25),
    ]
}

fn view_names(table: &Table<User>) -> Vec<&'static str> {
    table.view_rows().iter().map(|u| u.name).collect()
}

fn selection_changes(events: &[TableEvent<User>]) -> Vec<Vec<u32>> {
    events
        .iter()
        .filter_map(|event| match event {
            TableEvent::SelectionChange { rows } => {
                Some(rows.iter().map(|r| r.id).collect())
            }
            _ => None,
        })
        .collect()
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_header_activation_cycles_sort_direction() {
    let table = Table::with_rows(columns(), users());
    assert_eq!(view_names(&table), vec!["Charlie", "Alice", "Bob"]);

    assert_eq!(table.on_header_activate("name"), EventResult::Consumed);
    assert_eq!(view_names(&table), vec!["Alice", "Bob", "Charlie"]);
    assert_eq!(table.sort(), Some(SortSpec::ascending("name")));

    assert_eq!(table.on_header_activate("name"), EventResult::Consumed);
    assert_eq!(view_names(&table), vec!["Charlie", "Bob", "Alice"]);
    assert_eq!(table.sort(), Some(SortSpec::descending("name")));

    assert_eq!(table.on_header_activate("name"), EventResult::Consumed);
    assert_eq!(view_names(&table), vec!["Alice", "Bob", "Charlie"]);
}

#[test]
fn test_non_sortable_header_is_ignored() {
    let table = Table::with_rows(columns(), users());

    assert_eq!(table.on_header_activate("notes"), EventResult::Ignored);
    assert_eq!(table.on_header_activate("missing"), EventResult::Ignored);
    assert_eq!(table.sort(), None);
    assert_eq!(view_names(&table), vec!["Charlie", "Alice", "Bob"]);
    assert!(table.take_events().is_empty());
}

#[test]
fn test_sorting_does_not_mutate_rows() {
    let table = Table::with_rows(columns(), users());
    table.on_header_activate("age");

    // The caller-supplied order is untouched; only the view changes.
    assert_eq!(table.rows(), users());
    assert_eq!(view_names(&table), vec!["Bob", "Alice", "Charlie"]);
}

#[test]
fn test_clear_sort_restores_original_order() {
    let table = Table::with_rows(columns(), users());
    table.on_header_activate("name");
    table.clear_sort();
    assert_eq!(view_names(&table), vec!["Charlie", "Alice", "Bob"]);
}

#[test]
fn test_sort_event_carries_column_and_direction() {
    let table = Table::with_rows(columns(), users());
    table.on_header_activate("age");
    table.on_header_activate("age");

    let directions: Vec<SortDirection> = table
        .take_events()
        .into_iter()
        .filter_map(|event| match event {
            TableEvent::Sort { column, direction } => {
                assert_eq!(column, "age");
                Some(direction)
            }
            _ => None,
        })
        .collect();
    assert_eq!(
        directions,
        vec![SortDirection::Ascending, SortDirection::Descending]
    );
}

#[test]
fn test_sort_directive_survives_row_replacement() {
    let table = Table::with_rows(columns(), users());
    table.on_header_activate("name");

    table.set_rows(vec![
        User::new(4, "Zoe", 28),
        User::new(5, "Dave", 41),
    ]);
    assert_eq!(table.sort(), Some(SortSpec::ascending("name")));
    assert_eq!(view_names(&table), vec!["Dave", "Zoe"]);
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_checkbox_then_header_checkbox_selects_all() {
    let table =
        Table::with_rows(columns(), users()).with_selection_mode(SelectionMode::Multiple);

    assert_eq!(table.on_row_checkbox_activate(&1), EventResult::Consumed);
    assert_eq!(
        table.on_header_checkbox_activate(),
        EventResult::Consumed
    );

    assert_eq!(table.selected_keys(), vec![1, 2, 3]);
    assert!(table.all_selected());

    let changes = selection_changes(&table.take_events());
    assert_eq!(changes, vec![vec![1], vec![1, 2, 3]]);
}

#[test]
fn test_header_checkbox_toggles_off_when_all_selected() {
    let table =
        Table::with_rows(columns(), users()).with_selection_mode(SelectionMode::Multiple);

    table.on_header_checkbox_activate();
    assert!(table.all_selected());

    table.on_header_checkbox_activate();
    assert!(table.selected_keys().is_empty());
    assert!(!table.all_selected());
}

#[test]
fn test_selection_disabled_mode_activates_instead() {
    let table = Table::with_rows(columns(), users());
    assert_eq!(table.selection_mode(), SelectionMode::None);

    assert_eq!(table.on_row_checkbox_activate(&1), EventResult::Ignored);
    assert_eq!(table.on_header_checkbox_activate(), EventResult::Ignored);
    assert!(table.selected_keys().is_empty());

    // Row activation without selection emits Activate.
    assert_eq!(table.on_row_activate(&2), EventResult::Consumed);
    let activated: Vec<u32> = table
        .take_events()
        .into_iter()
        .filter_map(|event| match event {
            TableEvent::Activate { row } => Some(row.id),
            _ => None,
        })
        .collect();
    assert_eq!(activated, vec![2]);
}

#[test]
fn test_single_mode_replaces_selection() {
    let table =
        Table::with_rows(columns(), users()).with_selection_mode(SelectionMode::Single);

    table.on_row_activate(&1);
    table.on_row_activate(&3);
    assert_eq!(table.selected_keys(), vec![3]);

    // Single mode has no select-all.
    assert_eq!(table.on_header_checkbox_activate(), EventResult::Ignored);
    assert_eq!(table.selected_keys(), vec![3]);
}

#[test]
fn test_selection_tracks_keys_across_sorting() {
    let table =
        Table::with_rows(columns(), users()).with_selection_mode(SelectionMode::Multiple);

    table.toggle_select(&2);
    table.on_header_activate("name");

    // Alice moved to view position 0, but the selection still names her.
    assert!(table.is_selected(&2));
    assert!(table.is_selected_at(0));
    assert!(!table.is_selected_at(1));
}

#[test]
fn test_selection_survives_row_replacement() {
    let table =
        Table::with_rows(columns(), users()).with_selection_mode(SelectionMode::Multiple);
    table.toggle_select(&1);
    table.toggle_select(&3);

    table.set_rows(vec![User::new(3, "Bob", 26), User::new(9, "Nina", 33)]);

    // Stale key 1 stays in the set; only present rows show up in the
    // snapshot.
    assert_eq!(table.selected_keys(), vec![1, 3]);
    let present: Vec<u32> = table.selected_rows().iter().map(|u| u.id).collect();
    assert_eq!(present, vec![3]);
    assert!(!table.all_selected());
}

#[test]
fn test_select_all_drops_stale_keys() {
    let table =
        Table::with_rows(columns(), users()).with_selection_mode(SelectionMode::Multiple);
    table.toggle_select(&2);
    table.set_rows(vec![User::new(7, "Gail", 50), User::new(2, "Alice", 30)]);

    table.select_all();
    assert_eq!(table.selected_keys(), vec![2, 7]);
    assert!(table.all_selected());
}

#[test]
fn test_header_checkbox_on_empty_collection_clears_stale_selection() {
    let table =
        Table::with_rows(columns(), users()).with_selection_mode(SelectionMode::Multiple);
    table.toggle_select(&1);
    table.toggle_select(&2);
    table.set_rows(vec![]);
    table.take_events();

    // Not all-selected on an empty collection, so the checkbox makes the
    // selection exactly the (empty) collection, dropping the stale keys.
    assert_eq!(table.on_header_checkbox_activate(), EventResult::Consumed);
    assert!(table.selected_keys().is_empty());
    let changes = selection_changes(&table.take_events());
    assert_eq!(changes, vec![Vec::<u32>::new()]);

    // Nothing left to drop; a second activation is silent.
    assert_eq!(table.on_header_checkbox_activate(), EventResult::Ignored);
    assert!(table.take_events().is_empty());
}

#[test]
fn test_select_all_that_only_purges_stale_keys_is_handled() {
    let table =
        Table::with_rows(columns(), users()).with_selection_mode(SelectionMode::Multiple);
    table.select_all();
    table.set_rows(vec![User::new(2, "Alice", 30)]);
    table.take_events();

    // Keys 1 and 3 are stale and 2 is already selected, so this
    // select-all removes without adding; it still counts as a change.
    let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
    assert_eq!(table.on_key(&ctrl_a), EventResult::Consumed);
    assert_eq!(table.selected_keys(), vec![2]);
    let changes = selection_changes(&table.take_events());
    assert_eq!(changes, vec![vec![2]]);
}

#[test]
fn test_rows_with_equal_fields_are_distinct_records() {
    let twins = vec![User::new(1, "Alex", 40), User::new(2, "Alex", 40)];
    let table =
        Table::with_rows(columns(), twins).with_selection_mode(SelectionMode::Multiple);

    table.toggle_select(&1);
    assert!(table.is_selected(&1));
    assert!(!table.is_selected(&2));
    assert_eq!(table.selection_len(), 1);
}

#[test]
fn test_toggle_select_emits_snapshot_in_selection_order() {
    let table =
        Table::with_rows(columns(), users()).with_selection_mode(SelectionMode::Multiple);

    table.toggle_select(&3);
    table.toggle_select(&1);
    let changes = selection_changes(&table.take_events());
    assert_eq!(changes, vec![vec![3], vec![3, 1]]);
}

#[test]
fn test_deselect_all_emits_once() {
    let table =
        Table::with_rows(columns(), users()).with_selection_mode(SelectionMode::Multiple);
    table.select_all();
    table.take_events();

    assert_eq!(table.deselect_all(), vec![1, 2, 3]);
    let changes = selection_changes(&table.take_events());
    assert_eq!(changes, vec![Vec::<u32>::new()]);

    // Nothing left to deselect; no further event.
    assert!(table.deselect_all().is_empty());
    assert!(table.take_events().is_empty());
}

// ============================================================================
// Keyboard handling
// ============================================================================

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_arrow_keys_move_the_cursor() {
    let table = Table::with_rows(columns(), users());
    assert_eq!(table.cursor(), None);

    assert_eq!(table.on_key(&press(KeyCode::Down)), EventResult::Consumed);
    assert_eq!(table.cursor(), Some(0));

    table.on_key(&press(KeyCode::Down));
    assert_eq!(table.cursor(), Some(1));

    table.on_key(&press(KeyCode::End));
    assert_eq!(table.cursor(), Some(2));

    // Already at the last row.
    assert_eq!(table.on_key(&press(KeyCode::Down)), EventResult::Ignored);

    table.on_key(&press(KeyCode::Home));
    assert_eq!(table.cursor(), Some(0));
}

#[test]
fn test_space_toggles_selection_at_cursor() {
    let table =
        Table::with_rows(columns(), users()).with_selection_mode(SelectionMode::Multiple);
    table.on_key(&press(KeyCode::Down));

    assert_eq!(
        table.on_key(&press(KeyCode::Char(' '))),
        EventResult::Consumed
    );
    assert_eq!(table.selected_keys(), vec![1]);

    table.on_key(&press(KeyCode::Char(' ')));
    assert!(table.selected_keys().is_empty());
}

#[test]
fn test_ctrl_a_selects_all_and_esc_clears() {
    let table =
        Table::with_rows(columns(), users()).with_selection_mode(SelectionMode::Multiple);

    let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
    assert_eq!(table.on_key(&ctrl_a), EventResult::Consumed);
    assert!(table.all_selected());

    assert_eq!(table.on_key(&press(KeyCode::Esc)), EventResult::Consumed);
    assert!(table.selected_keys().is_empty());
}

#[test]
fn test_enter_activates_cursor_row() {
    let table = Table::with_rows(columns(), users());
    table.on_key(&press(KeyCode::Down));
    table.take_events();

    assert_eq!(table.on_key(&press(KeyCode::Enter)), EventResult::Consumed);
    let activated: Vec<u32> = table
        .take_events()
        .into_iter()
        .filter_map(|event| match event {
            TableEvent::Activate { row } => Some(row.id),
            _ => None,
        })
        .collect();
    assert_eq!(activated, vec![1]);
}

// ============================================================================
// Mouse handling
// ============================================================================

#[test]
fn test_click_on_header_sorts() {
    let table = Table::with_rows(columns(), users());

    // No checkbox column when selection is disabled, so x=0 lands on the
    // first column ("name", width 12).
    assert_eq!(table.on_click(0, 0), EventResult::Consumed);
    assert_eq!(table.sort(), Some(SortSpec::ascending("name")));

    // x=12 is the start of the "age" column.
    assert_eq!(table.on_click(12, 0), EventResult::Consumed);
    assert_eq!(table.sort(), Some(SortSpec::ascending("age")));
}

#[test]
fn test_click_layout_shifts_with_checkbox_column() {
    let table =
        Table::with_rows(columns(), users()).with_selection_mode(SelectionMode::Multiple);

    // The first two cells are the header checkbox.
    assert_eq!(table.on_click(1, 0), EventResult::Consumed);
    assert!(table.all_selected());
    assert_eq!(table.sort(), None);

    // Columns start after the checkbox region.
    assert_eq!(table.on_click(2, 0), EventResult::Consumed);
    assert_eq!(table.sort(), Some(SortSpec::ascending("name")));
}

#[test]
fn test_click_on_row_toggles_selection() {
    let table =
        Table::with_rows(columns(), users()).with_selection_mode(SelectionMode::Multiple);

    // y=1 is the first data row (Charlie, key 1).
    assert_eq!(table.on_click(5, 1), EventResult::Consumed);
    assert_eq!(table.selected_keys(), vec![1]);
    assert_eq!(table.cursor(), Some(0));

    // Click past the last row.
    assert_eq!(table.on_click(5, 40), EventResult::Ignored);
}

// ============================================================================
// Events & dirty tracking
// ============================================================================

#[test]
fn test_take_events_drains_the_queue() {
    let table =
        Table::with_rows(columns(), users()).with_selection_mode(SelectionMode::Multiple);
    table.toggle_select(&1);

    assert_eq!(table.take_events().len(), 1);
    assert!(table.take_events().is_empty());
}

#[test]
fn test_state_changes_mark_the_table_dirty() {
    let table = Table::with_rows(columns(), users());
    table.clear_dirty();
    assert!(!table.is_dirty());

    table.on_header_activate("name");
    assert!(table.is_dirty());

    table.clear_dirty();
    table.set_rows(users());
    assert!(table.is_dirty());
}

#[test]
fn test_clones_share_state() {
    let table =
        Table::with_rows(columns(), users()).with_selection_mode(SelectionMode::Multiple);
    let handle = table.clone();

    handle.toggle_select(&2);
    assert_eq!(table.selected_keys(), vec![2]);
    assert_eq!(table.id(), handle.id());
}
