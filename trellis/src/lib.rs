//! Headless table and text input widgets for terminal UIs.
//!
//! `trellis` provides two self-contained widgets:
//!
//! - [`Table`]: a data grid with single-column sorting, row selection,
//!   and cursor navigation. The sort/selection state machine is fully
//!   headless; rendering is a thin layer over the computed view.
//! - [`Input`]: a single-line text field with placeholder, label,
//!   helper/error text, disabled state, and masked display.
//!
//! Widgets own their state behind shared handles and communicate with the
//! host application through an event queue: user intents go in via the
//! `on_*` methods, and state-change notifications come back out via
//! `take_events()`.

pub mod events;
pub mod input;
pub mod selection;
pub mod table;

pub use events::EventResult;
pub use input::{Input, InputEvent, InputId};
pub use selection::{Selection, SelectionMode};
pub use table::{
    Alignment, CellValue, Column, SortDirection, SortSpec, Table, TableEvent, TableId, TableRow,
};
