//! Input widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use super::events::InputEvent;

/// Unique identifier for an Input widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputId(usize);

impl InputId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for InputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__input_{}", self.0)
    }
}

/// Internal state for an Input widget.
#[derive(Debug, Default)]
struct InputInner {
    /// Current text value.
    value: String,
    /// Cursor position (byte offset).
    cursor: usize,
    /// Placeholder text shown while the value is empty.
    placeholder: String,
    /// Label shown above the field.
    label: String,
    /// Helper text shown below the field.
    helper: String,
    /// Validation error message (if any). Takes the helper text's place.
    error: Option<String>,
    /// Whether editing is disabled.
    disabled: bool,
    /// Whether the value renders masked (password-style).
    masked: bool,
    /// Whether a masked value is temporarily revealed.
    revealed: bool,
    /// Outbound events waiting to be drained.
    events: Vec<InputEvent>,
}

/// A single-line text input field.
///
/// `Input` manages its own text value, cursor position, and presentation
/// state (placeholder, label, helper text, error message, disabled and
/// masked flags). Editing goes through `on_key`; programmatic access
/// through the methods below. State lives behind a shared handle, so
/// clones refer to the same field.
#[derive(Debug)]
pub struct Input {
    /// Unique identifier for this input instance.
    id: InputId,
    /// Internal state.
    inner: Arc<RwLock<InputInner>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl Input {
    /// Create a new empty input.
    pub fn new() -> Self {
        Self {
            id: InputId::new(),
            inner: Arc::new(RwLock::new(InputInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create an input with an initial value.
    pub fn with_value(value: impl Into<String>) -> Self {
        let input = Self::new();
        input.set_value(value);
        input
    }

    /// Set the placeholder text (builder style).
    pub fn placeholder(self, placeholder: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.placeholder = placeholder.into();
        }
        self
    }

    /// Set the label text (builder style).
    pub fn label(self, label: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.label = label.into();
        }
        self
    }

    /// Set the helper text (builder style).
    pub fn helper(self, helper: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.helper = helper.into();
        }
        self
    }

    /// Mask the value, password-style (builder style).
    pub fn masked(self) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.masked = true;
        }
        self
    }

    /// Get the unique ID for this input.
    pub fn id(&self) -> InputId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the current text value.
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Get the placeholder text.
    pub fn placeholder_text(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.placeholder.clone())
            .unwrap_or_default()
    }

    /// Get the label text.
    pub fn label_text(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.label.clone())
            .unwrap_or_default()
    }

    /// Get the helper text.
    pub fn helper_text(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.helper.clone())
            .unwrap_or_default()
    }

    /// Get the cursor position (byte offset).
    pub fn cursor(&self) -> usize {
        self.inner.read().map(|guard| guard.cursor).unwrap_or(0)
    }

    /// Check if the input is empty.
    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.value.is_empty())
            .unwrap_or(true)
    }

    /// Get the length of the current value in bytes.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.value.len())
            .unwrap_or(0)
    }

    /// Check if editing is disabled.
    pub fn is_disabled(&self) -> bool {
        self.inner.read().map(|guard| guard.disabled).unwrap_or(false)
    }

    /// Check if the value renders masked.
    pub fn is_masked(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.masked && !guard.revealed)
            .unwrap_or(false)
    }

    /// Check if this input is in an invalid state (has an error).
    pub fn is_invalid(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.error.is_some())
            .unwrap_or(false)
    }

    /// Get the current validation error message (if any).
    pub fn error(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.error.clone())
            .unwrap_or(None)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the text value, placing the cursor at the end.
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
            guard.cursor = guard.value.len();
            guard.error = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the input value.
    ///
    /// Pushes a change event when the value was non-empty, mirroring the
    /// clear button on the rendered field.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.value.is_empty() {
                return;
            }
            guard.value.clear();
            guard.cursor = 0;
            guard.error = None;
            guard.events.push(InputEvent::Changed(String::new()));
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&self, placeholder: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.placeholder = placeholder.into();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Enable or disable editing.
    pub fn set_disabled(&self, disabled: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.disabled = disabled;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Toggle visibility of a masked value.
    pub fn toggle_reveal(&self) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.masked {
                guard.revealed = !guard.revealed;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Set the cursor position (clamped to the value length).
    pub fn set_cursor(&self, position: usize) {
        if let Ok(mut guard) = self.inner.write() {
            guard.cursor = position.min(guard.value.len());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Text manipulation
    // -------------------------------------------------------------------------

    /// Insert a character at the cursor position.
    pub fn insert_char(&self, c: char) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.disabled {
                return;
            }
            let cursor = guard.cursor;
            guard.value.insert(cursor, c);
            guard.cursor += c.len_utf8();
            guard.error = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Delete the character before the cursor (backspace).
    pub fn delete_char_before(&self) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.disabled || guard.cursor == 0 {
                return;
            }
            let prev_cursor = guard.value[..guard.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            guard.value.remove(prev_cursor);
            guard.cursor = prev_cursor;
            guard.error = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Delete the character at the cursor (delete key).
    pub fn delete_char_at(&self) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.disabled {
                return;
            }
            let cursor = guard.cursor;
            if cursor < guard.value.len() {
                guard.value.remove(cursor);
                guard.error = None;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Move cursor left one character.
    pub fn cursor_left(&self) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.cursor > 0 {
                guard.cursor = guard.value[..guard.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Move cursor right one character.
    pub fn cursor_right(&self) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.cursor < guard.value.len() {
                guard.cursor = guard.value[guard.cursor..]
                    .char_indices()
                    .nth(1)
                    .map(|(i, _)| guard.cursor + i)
                    .unwrap_or(guard.value.len());
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Move cursor to the start.
    pub fn cursor_home(&self) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.cursor != 0 {
                guard.cursor = 0;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Move cursor to the end.
    pub fn cursor_end(&self) {
        if let Ok(mut guard) = self.inner.write() {
            let end = guard.value.len();
            if guard.cursor != end {
                guard.cursor = end;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Set a validation error message on this input.
    pub fn set_error(&self, msg: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error = Some(msg.into());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the validation error.
    pub fn clear_error(&self) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.error.is_some() {
                guard.error = None;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Events & dirty tracking
    // -------------------------------------------------------------------------

    /// Drain the pending outbound events.
    pub fn take_events(&self) -> Vec<InputEvent> {
        self.inner
            .write()
            .map(|mut guard| std::mem::take(&mut guard.events))
            .unwrap_or_default()
    }

    pub(super) fn push_event(&self, event: InputEvent) {
        if let Ok(mut guard) = self.inner.write() {
            guard.events.push(event);
        }
    }

    /// Check if the input state has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag after rendering.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for Input {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}
