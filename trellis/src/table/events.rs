//! Event handling for the Table widget.
//!
//! Inbound user intents map 1:1 onto the state operations: header
//! activation toggles the sort directive, row/checkbox activation drives
//! selection. Outbound [`TableEvent`]s are queued on the widget and
//! drained by the host with `take_events()`.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::events::EventResult;
use crate::selection::SelectionMode;

use super::item::TableRow;
use super::sort::SortDirection;
use super::state::Table;

/// Width of the checkbox column when selection is enabled.
pub(super) const CHECKBOX_WIDTH: u16 = 2;

/// Outbound notification from a [`Table`].
#[derive(Debug, Clone)]
pub enum TableEvent<T: TableRow> {
    /// The sort directive changed through a header activation.
    Sort {
        column: String,
        direction: SortDirection,
    },
    /// The selection changed. Carries the ordered snapshot of selected
    /// rows still present: previously selected first, newly added last.
    SelectionChange { rows: Vec<T> },
    /// A row was activated (Enter or click with selection disabled).
    Activate { row: T },
    /// The cursor moved to a new view index.
    CursorMove { index: usize },
}

impl<T: TableRow> Table<T> {
    /// Header activation on a column: toggle its sort directive.
    ///
    /// Non-sortable and unknown columns are ignored.
    pub fn on_header_activate(&self, column_id: &str) -> EventResult {
        match self.toggle_sort(column_id) {
            Some(_) => EventResult::Consumed,
            None => EventResult::Ignored,
        }
    }

    /// Row activation: toggle selection, or activate when selection is
    /// disabled.
    pub fn on_row_activate(&self, key: &T::Key) -> EventResult {
        if let Some(view_index) = self.view_position(key) {
            self.set_cursor(view_index);
        }
        match self.selection_mode() {
            SelectionMode::None => self.activate(key),
            SelectionMode::Single => {
                if self.select(key) {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            SelectionMode::Multiple => {
                if self.toggle_select(key) {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
        }
    }

    /// Row checkbox activation: toggle that row's selection.
    pub fn on_row_checkbox_activate(&self, key: &T::Key) -> EventResult {
        match self.selection_mode() {
            SelectionMode::None => EventResult::Ignored,
            SelectionMode::Single => {
                if self.select(key) {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            SelectionMode::Multiple => {
                if self.toggle_select(key) {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
        }
    }

    /// Header checkbox activation: flip the all-selected state.
    pub fn on_header_checkbox_activate(&self) -> EventResult {
        if self.toggle_select_all() {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// Handle a key event while the table has focus.
    pub fn on_key(&self, key: &KeyEvent) -> EventResult {
        if key.kind == KeyEventKind::Release {
            return EventResult::Ignored;
        }

        match key.code {
            KeyCode::Up => {
                if self.cursor_up() {
                    self.scroll_to_cursor();
                    return EventResult::Consumed;
                }
            }
            KeyCode::Down => {
                if self.cursor_down() {
                    self.scroll_to_cursor();
                    return EventResult::Consumed;
                }
            }
            KeyCode::Home => {
                if self.cursor_first() {
                    self.scroll_to_cursor();
                    return EventResult::Consumed;
                }
            }
            KeyCode::End => {
                if self.cursor_last() {
                    self.scroll_to_cursor();
                    return EventResult::Consumed;
                }
            }
            KeyCode::Char(' ') => {
                let toggled = match self.selection_mode() {
                    SelectionMode::Single => self
                        .cursor_row()
                        .map(|row| self.select(&row.key()))
                        .unwrap_or(false),
                    _ => self.toggle_select_at_cursor(),
                };
                if toggled {
                    return EventResult::Consumed;
                }
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.select_all() {
                    return EventResult::Consumed;
                }
            }
            KeyCode::Esc => {
                if !self.deselect_all().is_empty() {
                    return EventResult::Consumed;
                }
            }
            KeyCode::Enter => {
                if let Some(row) = self.cursor_row() {
                    return self.activate(&row.key());
                }
            }
            _ => {}
        }
        EventResult::Ignored
    }

    /// Handle a click at table-relative coordinates.
    ///
    /// Row 0 is the header: the checkbox region flips all-selected, a
    /// column header toggles its sort. Clicks below the header land on
    /// data rows in view order.
    pub fn on_click(&self, x: u16, y: u16) -> EventResult {
        let checkbox = self.selection_mode() != SelectionMode::None;

        if y == 0 {
            if checkbox && x < CHECKBOX_WIDTH {
                return self.on_header_checkbox_activate();
            }
            let Some(column_id) = self.column_from_x(x) else {
                return EventResult::Ignored;
            };
            return self.on_header_activate(&column_id);
        }

        let view_index = (self.scroll_offset_y() + y - 1) / T::HEIGHT;
        let Some(row) = self.view_row(view_index as usize) else {
            return EventResult::Ignored;
        };
        self.set_cursor(view_index as usize);

        if checkbox && x < CHECKBOX_WIDTH {
            return self.on_row_checkbox_activate(&row.key());
        }
        self.on_row_activate(&row.key())
    }

    /// Which column id is under an x-coordinate, past the checkbox region.
    fn column_from_x(&self, x: u16) -> Option<String> {
        let offset = if self.selection_mode() == SelectionMode::None {
            0
        } else {
            CHECKBOX_WIDTH
        };
        let x = x.checked_sub(offset)?;
        let mut col_x = 0u16;
        for col in self.columns() {
            if x >= col_x && x < col_x + col.width {
                return Some(col.id);
            }
            col_x += col.width;
        }
        None
    }

    /// Push an activate event for the row with the given key.
    fn activate(&self, key: &T::Key) -> EventResult {
        let Some((_, row)) = self.find_row(key) else {
            return EventResult::Ignored;
        };
        if let Ok(mut guard) = self.inner.write() {
            guard.events.push(TableEvent::Activate { row });
            return EventResult::Consumed;
        }
        EventResult::Ignored
    }

    /// Find the view position of the row with the given key.
    fn view_position(&self, key: &T::Key) -> Option<usize> {
        self.inner.read().ok().and_then(|g| {
            let model = g.rows.iter().position(|row| &row.key() == key)?;
            g.view.iter().position(|&i| i == model)
        })
    }
}
