//! Table widget - a data grid with sorting, row selection, and cursor
//! navigation.
//!
//! The Table widget provides:
//! - Column-based layout with a header row
//! - Single-column sorting with a stable derived view (the caller's rows
//!   are never reordered)
//! - Row selection by stable key, with an all-selected header checkbox
//! - Cursor navigation and vertical scrolling
//! - Loading and empty placeholder states
//!
//! # Example
//!
//! ```ignore
//! use trellis::{CellValue, Column, SelectionMode, Table, TableRow};
//!
//! #[derive(Clone, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     age: i64,
//! }
//!
//! impl TableRow for User {
//!     type Key = u32;
//!
//!     fn key(&self) -> u32 {
//!         self.id
//!     }
//!
//!     fn value(&self, column_id: &str) -> CellValue {
//!         match column_id {
//!             "id" => self.id.into(),
//!             "name" => CellValue::text(&self.name),
//!             "age" => self.age.into(),
//!             _ => CellValue::Empty,
//!         }
//!     }
//! }
//!
//! let columns = vec![
//!     Column::new("id", "ID").fixed(6).sortable(),
//!     Column::new("name", "Name").fixed(25).sortable(),
//!     Column::new("age", "Age").fixed(6).sortable(),
//! ];
//! let table = Table::with_rows(columns, users)
//!     .with_selection_mode(SelectionMode::Multiple);
//!
//! table.on_header_activate("name");
//! for event in table.take_events() {
//!     // react to TableEvent::Sort / SelectionChange / ...
//! }
//! ```

mod events;
mod item;
pub mod render;
pub mod sort;
mod state;
mod value;

pub use events::TableEvent;
pub use item::{Alignment, Column, TableRow};
pub use sort::{SortDirection, SortSpec};
pub use state::{Table, TableId};
pub use value::CellValue;
