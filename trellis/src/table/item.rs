//! TableRow trait and Column types for table display.

use std::fmt;

use super::value::CellValue;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Column configuration.
///
/// Columns define the structure of the table: a stable id used to read
/// values from rows, header text, width, alignment, and whether the
/// column is sortable.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     Column::new("id", "ID").fixed(8),
///     Column::new("name", "Name").fixed(25).sortable(),
///     Column::new("status", "Status").fixed(12).align(Alignment::Center),
/// ];
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    /// Stable column id, passed to [`TableRow::value`].
    pub id: String,
    /// Column header text.
    pub title: String,
    /// Column width in terminal columns.
    pub width: u16,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Whether this column is sortable.
    pub sortable: bool,
}

/// Default column width when `fixed` is not called.
const DEFAULT_COLUMN_WIDTH: u16 = 16;

impl Column {
    /// Create a new column.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            width: DEFAULT_COLUMN_WIDTH,
            align: Alignment::Left,
            sortable: false,
        }
    }

    /// Set a fixed width in terminal columns.
    pub fn fixed(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Make the column sortable.
    ///
    /// Sortable columns show a sort indicator in the header and respond
    /// to header activation by toggling the sort directive.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// Trait for items that can be displayed as rows in a [`Table`].
///
/// The associated `Key` is a stable identifier used to track selection
/// across sorting and data refreshes. Two rows with equal field values
/// but different keys are tracked independently.
///
/// `value` is the typed field accessor keyed by column id; sorting reads
/// it, and the default `cell` rendering formats it. Return
/// [`CellValue::Empty`] for unknown column ids.
///
/// # Examples
///
/// ```ignore
/// #[derive(Clone, Debug)]
/// struct User {
///     id: u32,
///     name: String,
///     age: i64,
/// }
///
/// impl TableRow for User {
///     type Key = u32;
///
///     fn key(&self) -> u32 {
///         self.id
///     }
///
///     fn value(&self, column_id: &str) -> CellValue {
///         match column_id {
///             "id" => self.id.into(),
///             "name" => CellValue::text(&self.name),
///             "age" => self.age.into(),
///             _ => CellValue::Empty,
///         }
///     }
/// }
/// ```
///
/// [`Table`]: super::Table
pub trait TableRow: Clone + Send + Sync + fmt::Debug + 'static {
    /// Stable identifier for this row.
    type Key: PartialEq + Clone + Send + Sync + fmt::Debug + 'static;

    /// Get the row's key.
    fn key(&self) -> Self::Key;

    /// Read the typed value of a field by column id.
    fn value(&self, column_id: &str) -> CellValue;

    /// Render a cell as display text (override for custom formatting).
    fn cell(&self, column_id: &str) -> String {
        self.value(column_id).to_string()
    }

    /// Height of each row in terminal rows.
    const HEIGHT: u16 = 1;

    /// Selection indicator prefix for a row.
    fn selection_indicator(selected: bool) -> &'static str {
        if selected {
            "■ "
        } else {
            "□ "
        }
    }
}
