//! Table widget state.

use std::ops::Range;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::{debug, warn};

use crate::selection::{Selection, SelectionMode};

use super::events::{CHECKBOX_WIDTH, TableEvent};
use super::item::{Column, TableRow};
use super::sort::{self, SortDirection, SortSpec};

/// Unique identifier for a Table widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// Internal state for the Table widget.
#[derive(Debug)]
pub(super) struct TableInner<T: TableRow> {
    /// Column definitions.
    pub columns: Vec<Column>,
    /// The rows in the table, in the order the caller supplied them.
    pub rows: Vec<T>,
    /// Derived view order: indices into `rows` per the sort directive.
    pub view: Vec<usize>,
    /// Selection state (by row key).
    pub selection: Selection<T::Key>,
    /// Selection mode.
    pub selection_mode: SelectionMode,
    /// Current cursor position (index into `view`).
    pub cursor: Option<usize>,
    /// Vertical scroll offset in terminal rows.
    pub scroll_offset_y: u16,
    /// Viewport height (including the header row).
    pub viewport_height: u16,
    /// Active sort directive, `None` for original order.
    pub sort: Option<SortSpec>,
    /// Whether the table is in a loading state (render-only).
    pub loading: bool,
    /// Outbound events waiting to be drained.
    pub events: Vec<TableEvent<T>>,
}

impl<T: TableRow> TableInner<T> {
    fn new(columns: Vec<Column>) -> Self {
        for (i, col) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.id == col.id) {
                warn!(
                    "duplicate column id {:?}; header activation resolves to the first",
                    col.id
                );
            }
        }
        Self {
            columns,
            rows: Vec::new(),
            view: Vec::new(),
            selection: Selection::new(),
            selection_mode: SelectionMode::None,
            cursor: None,
            scroll_offset_y: 0,
            viewport_height: 0,
            sort: None,
            loading: false,
            events: Vec::new(),
        }
    }

    /// Recompute the derived view from the current rows and directive.
    fn recompute_view(&mut self) {
        self.view = sort::sort_view(&self.rows, self.sort.as_ref());
        if let Some(cursor) = self.cursor {
            if cursor >= self.view.len() {
                self.cursor = self.view.len().checked_sub(1);
            }
        }
    }

    /// All row keys in collection order.
    fn all_keys(&self) -> Vec<T::Key> {
        self.rows.iter().map(|row| row.key()).collect()
    }

    /// Ordered snapshot of the selected rows still present.
    ///
    /// Stale keys (selected rows no longer in the collection) are skipped,
    /// never an error.
    fn selected_rows(&self) -> Vec<T> {
        self.selection
            .selected()
            .iter()
            .filter_map(|key| self.rows.iter().find(|row| &row.key() == key))
            .cloned()
            .collect()
    }

    fn push_selection_event(&mut self) {
        let rows = self.selected_rows();
        self.events.push(TableEvent::SelectionChange { rows });
    }
}

/// A data grid widget with sorting, selection, and cursor navigation.
///
/// `Table<T>` owns its rows and derives a sorted view from them; the rows
/// themselves are never reordered or mutated. Sort and selection are
/// session state: they live as long as the widget instance and are not
/// reset when the rows are replaced.
///
/// State lives behind a shared handle, so clones refer to the same table.
#[derive(Debug)]
pub struct Table<T: TableRow> {
    /// Unique identifier.
    id: TableId,
    /// Internal state.
    pub(super) inner: Arc<RwLock<TableInner<T>>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl<T: TableRow> Clone for Table<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: TableRow> Table<T> {
    /// Create a new table with column definitions.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(TableInner::new(columns))),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a table with initial rows.
    pub fn with_rows(columns: Vec<Column>, rows: Vec<T>) -> Self {
        let mut inner = TableInner::new(columns);
        inner.rows = rows;
        inner.recompute_view();
        Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(inner)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the selection mode (builder style).
    pub fn with_selection_mode(self, mode: SelectionMode) -> Self {
        self.set_selection_mode(mode);
        self
    }

    /// Get the unique ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    /// Get the column definitions.
    pub fn columns(&self) -> Vec<Column> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Replace the column definitions.
    pub fn set_columns(&self, columns: Vec<Column>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.columns = columns;
            guard.recompute_view();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.inner.read().map(|g| g.columns.len()).unwrap_or(0)
    }

    /// Get total content width (sum of all column widths, plus the
    /// checkbox column when selection is enabled).
    pub fn total_width(&self) -> u16 {
        self.inner
            .read()
            .map(|g| {
                let columns: u16 = g.columns.iter().map(|c| c.width).sum();
                let checkbox = if g.selection_mode == SelectionMode::None {
                    0
                } else {
                    CHECKBOX_WIDTH
                };
                columns + checkbox
            })
            .unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a row by its position in the caller-supplied order.
    pub fn row(&self, index: usize) -> Option<T> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.rows.get(index).cloned())
    }

    /// Get all rows in the caller-supplied order.
    pub fn rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.rows.clone())
            .unwrap_or_default()
    }

    /// Get a row by its position in the derived (sorted) view.
    pub fn view_row(&self, view_index: usize) -> Option<T> {
        self.inner.read().ok().and_then(|g| {
            g.view
                .get(view_index)
                .and_then(|&model| g.rows.get(model).cloned())
        })
    }

    /// Get all rows in derived view order.
    pub fn view_rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| {
                g.view
                    .iter()
                    .filter_map(|&model| g.rows.get(model).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Find a row and its model index by key.
    pub fn find_row(&self, key: &T::Key) -> Option<(usize, T)> {
        self.inner.read().ok().and_then(|g| {
            g.rows
                .iter()
                .enumerate()
                .find(|(_, row)| &row.key() == key)
                .map(|(i, row)| (i, row.clone()))
        })
    }

    /// Replace all rows.
    ///
    /// The derived view is recomputed and the cursor clamped. The
    /// selection is deliberately left alone: entries whose rows are gone
    /// stay selected without being visible, and are never purged
    /// automatically.
    pub fn set_rows(&self, rows: Vec<T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.rows = rows;
            guard.recompute_view();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Remove all rows. Selection is kept, like `set_rows`.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.rows.clear();
            guard.view.clear();
            guard.cursor = None;
            guard.scroll_offset_y = 0;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check the loading flag.
    pub fn loading(&self) -> bool {
        self.inner.read().map(|g| g.loading).unwrap_or(false)
    }

    /// Set the loading flag (render-only state).
    pub fn set_loading(&self, loading: bool) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.loading != loading {
                guard.loading = loading;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get the active sort directive.
    pub fn sort(&self) -> Option<SortSpec> {
        self.inner.read().ok().and_then(|g| g.sort.clone())
    }

    /// Whether a column id names a sortable column.
    pub fn is_sortable(&self, column_id: &str) -> bool {
        self.inner
            .read()
            .map(|g| {
                g.columns
                    .iter()
                    .any(|c| c.id == column_id && c.sortable)
            })
            .unwrap_or(false)
    }

    /// Toggle sort for a column, as a header activation does.
    ///
    /// A different column sorts ascending; the same column flips
    /// direction. Unknown or non-sortable columns are a no-op. Pushes a
    /// [`TableEvent::Sort`] and returns the new directive when it
    /// changed.
    pub fn toggle_sort(&self, column_id: &str) -> Option<SortSpec> {
        if let Ok(mut guard) = self.inner.write() {
            let sortable = guard
                .columns
                .iter()
                .any(|c| c.id == column_id && c.sortable);
            if !sortable {
                debug!("ignoring sort toggle on non-sortable column {:?}", column_id);
                return None;
            }
            let spec = sort::toggle(guard.sort.as_ref(), column_id);
            guard.sort = Some(spec.clone());
            guard.recompute_view();
            guard.events.push(TableEvent::Sort {
                column: spec.column.clone(),
                direction: spec.direction,
            });
            self.dirty.store(true, Ordering::SeqCst);
            return Some(spec);
        }
        None
    }

    /// Set the sort directive directly (no event is pushed).
    ///
    /// Unknown or non-sortable columns are ignored.
    pub fn set_sort(&self, column_id: &str, direction: SortDirection) {
        if let Ok(mut guard) = self.inner.write() {
            let sortable = guard
                .columns
                .iter()
                .any(|c| c.id == column_id && c.sortable);
            if !sortable {
                warn!("ignoring sort on non-sortable column {:?}", column_id);
                return;
            }
            guard.sort = Some(SortSpec {
                column: column_id.to_string(),
                direction,
            });
            guard.recompute_view();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the sort directive, restoring the original row order.
    pub fn clear_sort(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.sort = None;
            guard.recompute_view();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Get the selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.inner
            .read()
            .map(|g| g.selection_mode)
            .unwrap_or_default()
    }

    /// Set the selection mode. Switching to `None` empties the selection.
    pub fn set_selection_mode(&self, mode: SelectionMode) {
        if let Ok(mut guard) = self.inner.write() {
            guard.selection_mode = mode;
            if mode == SelectionMode::None {
                guard.selection.clear();
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Get all selected keys, in selection order.
    pub fn selected_keys(&self) -> Vec<T::Key> {
        self.inner
            .read()
            .map(|g| g.selection.selected().to_vec())
            .unwrap_or_default()
    }

    /// Get the selected rows still present, in selection order.
    pub fn selected_rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.selected_rows())
            .unwrap_or_default()
    }

    /// Get the number of selected keys (stale entries included).
    pub fn selection_len(&self) -> usize {
        self.inner.read().map(|g| g.selection.len()).unwrap_or(0)
    }

    /// Check if a row is selected by key.
    pub fn is_selected(&self, key: &T::Key) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.is_selected(key))
            .unwrap_or(false)
    }

    /// Check if the row at a view index is selected.
    pub fn is_selected_at(&self, view_index: usize) -> bool {
        self.inner
            .read()
            .map(|g| {
                g.view
                    .get(view_index)
                    .and_then(|&model| g.rows.get(model))
                    .map(|row| g.selection.is_selected(&row.key()))
                    .unwrap_or(false)
            })
            .unwrap_or(false)
    }

    /// Check whether every row is selected.
    ///
    /// A size comparison against the current collection, true only for a
    /// non-empty collection.
    pub fn all_selected(&self) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.all_selected(g.rows.len()))
            .unwrap_or(false)
    }

    /// Toggle selection of a row by key.
    ///
    /// No-op unless the mode is `Multiple`. The key does not have to name
    /// a current row; toggling a stale key simply removes it. Pushes a
    /// [`TableEvent::SelectionChange`] with the ordered snapshot and
    /// returns true when the selection changed.
    pub fn toggle_select(&self, key: &T::Key) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            if guard.selection_mode != SelectionMode::Multiple {
                return false;
            }
            guard.selection.toggle(key);
            guard.push_selection_event();
            self.dirty.store(true, Ordering::SeqCst);
            return true;
        }
        false
    }

    /// Select a single row by key, clearing other selection.
    ///
    /// No-op when selection is disabled. Pushes a selection event when
    /// the selection changed.
    pub fn select(&self, key: &T::Key) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            if guard.selection_mode == SelectionMode::None {
                return false;
            }
            let (added, removed) = guard.selection.select(key);
            if added.is_empty() && removed.is_empty() {
                return false;
            }
            guard.push_selection_event();
            self.dirty.store(true, Ordering::SeqCst);
            return true;
        }
        false
    }

    /// Toggle selection of the row at the cursor.
    pub fn toggle_select_at_cursor(&self) -> bool {
        let key = self
            .inner
            .read()
            .ok()
            .and_then(|g| {
                g.cursor
                    .and_then(|c| g.view.get(c).copied())
                    .and_then(|model| g.rows.get(model).map(|row| row.key()))
            });
        match key {
            Some(key) => self.toggle_select(&key),
            None => false,
        }
    }

    /// Select every current row.
    ///
    /// The selection becomes exactly the collection's keys: previously
    /// selected keys keep their order, the rest follow in collection
    /// order, and stale entries drop out. An empty collection therefore
    /// empties the selection. No-op unless the mode is `Multiple`.
    /// Pushes a selection event and returns true when anything changed.
    pub fn select_all(&self) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            if guard.selection_mode != SelectionMode::Multiple {
                return false;
            }
            let all_keys = guard.all_keys();
            let (added, removed) = guard.selection.select_all(&all_keys);
            if added.is_empty() && removed.is_empty() {
                return false;
            }
            guard.push_selection_event();
            self.dirty.store(true, Ordering::SeqCst);
            return true;
        }
        false
    }

    /// Clear all selection.
    ///
    /// Pushes a selection event when anything was deselected; returns the
    /// removed keys.
    pub fn deselect_all(&self) -> Vec<T::Key> {
        if let Ok(mut guard) = self.inner.write() {
            let removed = guard.selection.clear();
            if !removed.is_empty() {
                guard.push_selection_event();
                self.dirty.store(true, Ordering::SeqCst);
            }
            return removed;
        }
        vec![]
    }

    /// Flip the all-selected state, as the header checkbox does.
    ///
    /// If every row is currently selected the selection empties;
    /// otherwise it becomes exactly the whole collection, so on an empty
    /// collection any stale selection clears. No-op unless the mode is
    /// `Multiple`. Returns true when the selection changed.
    pub fn toggle_select_all(&self) -> bool {
        if self.selection_mode() != SelectionMode::Multiple {
            return false;
        }
        if self.all_selected() {
            !self.deselect_all().is_empty()
        } else {
            self.select_all()
        }
    }

    // -------------------------------------------------------------------------
    // Cursor
    // -------------------------------------------------------------------------

    /// Get the cursor position (index into the view order).
    pub fn cursor(&self) -> Option<usize> {
        self.inner.read().ok().and_then(|g| g.cursor)
    }

    /// Get the row at the cursor.
    pub fn cursor_row(&self) -> Option<T> {
        self.inner.read().ok().and_then(|g| {
            g.cursor
                .and_then(|c| g.view.get(c).copied())
                .and_then(|model| g.rows.get(model).cloned())
        })
    }

    /// Set the cursor position. Returns the previous position.
    pub fn set_cursor(&self, view_index: usize) -> Option<usize> {
        if let Ok(mut guard) = self.inner.write() {
            let previous = guard.cursor;
            if view_index < guard.view.len() && previous != Some(view_index) {
                guard.cursor = Some(view_index);
                guard.events.push(TableEvent::CursorMove { index: view_index });
                self.dirty.store(true, Ordering::SeqCst);
            }
            return previous;
        }
        None
    }

    /// Move the cursor up one row.
    pub fn cursor_up(&self) -> bool {
        self.move_cursor(|cursor, _len| match cursor {
            Some(c) if c > 0 => Some(c - 1),
            Some(_) => None,
            None => Some(0),
        })
    }

    /// Move the cursor down one row.
    pub fn cursor_down(&self) -> bool {
        self.move_cursor(|cursor, len| match cursor {
            Some(c) if c + 1 < len => Some(c + 1),
            Some(_) => None,
            None => Some(0),
        })
    }

    /// Move the cursor to the first row.
    pub fn cursor_first(&self) -> bool {
        self.move_cursor(|_, _| Some(0))
    }

    /// Move the cursor to the last row.
    pub fn cursor_last(&self) -> bool {
        self.move_cursor(|_, len| len.checked_sub(1))
    }

    fn move_cursor(&self, next: impl Fn(Option<usize>, usize) -> Option<usize>) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            if guard.view.is_empty() {
                return false;
            }
            let target = next(guard.cursor, guard.view.len());
            if let Some(target) = target {
                if guard.cursor != Some(target) {
                    guard.cursor = Some(target);
                    guard.events.push(TableEvent::CursorMove { index: target });
                    self.dirty.store(true, Ordering::SeqCst);
                    return true;
                }
            }
        }
        false
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    /// Get the vertical scroll offset (in terminal rows).
    pub fn scroll_offset_y(&self) -> u16 {
        self.inner.read().map(|g| g.scroll_offset_y).unwrap_or(0)
    }

    /// Set the viewport height (including the header row).
    pub fn set_viewport_height(&self, height: u16) {
        if let Ok(mut guard) = self.inner.write() {
            guard.viewport_height = height;
        }
    }

    /// Get the viewport height.
    pub fn viewport_height(&self) -> u16 {
        self.inner.read().map(|g| g.viewport_height).unwrap_or(0)
    }

    /// Get the range of view indices currently visible.
    ///
    /// An unset (zero) viewport shows everything.
    pub fn visible_row_range(&self) -> Range<usize> {
        self.inner
            .read()
            .map(|g| {
                let len = g.view.len();
                if g.viewport_height == 0 {
                    return 0..len;
                }
                let data_viewport = g.viewport_height.saturating_sub(1);
                let start = (g.scroll_offset_y / T::HEIGHT) as usize;
                let count = (data_viewport.div_ceil(T::HEIGHT)) as usize;
                let start = start.min(len);
                let end = (start + count).min(len);
                start..end
            })
            .unwrap_or(0..0)
    }

    /// Scroll so that a view row is visible.
    pub fn scroll_to_row(&self, view_index: usize) {
        if let Ok(mut guard) = self.inner.write() {
            if view_index >= guard.view.len() {
                return;
            }
            let row_top = view_index as u16 * T::HEIGHT;
            let row_bottom = row_top + T::HEIGHT;
            let data_viewport = guard.viewport_height.saturating_sub(1);
            if data_viewport == 0 {
                return;
            }
            if row_top < guard.scroll_offset_y {
                guard.scroll_offset_y = row_top;
                self.dirty.store(true, Ordering::SeqCst);
            } else if row_bottom > guard.scroll_offset_y + data_viewport {
                guard.scroll_offset_y = row_bottom.saturating_sub(data_viewport);
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Scroll to the cursor if it exists.
    pub fn scroll_to_cursor(&self) {
        if let Some(cursor) = self.cursor() {
            self.scroll_to_row(cursor);
        }
    }

    // -------------------------------------------------------------------------
    // Events & dirty tracking
    // -------------------------------------------------------------------------

    /// Drain the pending outbound events.
    pub fn take_events(&self) -> Vec<TableEvent<T>> {
        self.inner
            .write()
            .map(|mut g| std::mem::take(&mut g.events))
            .unwrap_or_default()
    }

    /// Check if the table state has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag after rendering.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}
