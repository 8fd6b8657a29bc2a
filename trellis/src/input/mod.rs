//! Input widget - a single-line text field with reactive state.
//!
//! # Example
//!
//! ```ignore
//! use trellis::Input;
//!
//! let email = Input::new()
//!     .label("Email")
//!     .placeholder("you@example.com")
//!     .helper("We never share your address");
//!
//! // keys arrive from the event loop:
//! email.on_key(&key_event);
//! for event in email.take_events() {
//!     // InputEvent::Changed / Submitted
//! }
//! ```

mod events;
pub mod render;
mod state;

pub use events::InputEvent;
pub use state::{Input, InputId};
