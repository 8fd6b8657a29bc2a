//! Event handling for the Input widget.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::events::EventResult;

use super::state::Input;

/// Outbound notification from an [`Input`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The value changed. Carries the new value.
    Changed(String),
    /// Enter was pressed. Carries the value at submission.
    Submitted(String),
}

impl Input {
    /// Handle a key event while the input has focus.
    ///
    /// A disabled input ignores everything. A change event is pushed
    /// only when the value actually changed; cursor movement is consumed
    /// silently.
    pub fn on_key(&self, key: &KeyEvent) -> EventResult {
        if key.kind == KeyEventKind::Release || self.is_disabled() {
            return EventResult::Ignored;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(KeyModifiers::ALT)
        {
            return EventResult::Ignored;
        }

        let old_value = self.value();

        let result = match key.code {
            KeyCode::Enter => {
                self.push_event(InputEvent::Submitted(old_value));
                return EventResult::Consumed;
            }
            KeyCode::Backspace => {
                self.delete_char_before();
                EventResult::Consumed
            }
            KeyCode::Delete => {
                self.delete_char_at();
                EventResult::Consumed
            }
            KeyCode::Left => {
                self.cursor_left();
                EventResult::Consumed
            }
            KeyCode::Right => {
                self.cursor_right();
                EventResult::Consumed
            }
            KeyCode::Home => {
                self.cursor_home();
                EventResult::Consumed
            }
            KeyCode::End => {
                self.cursor_end();
                EventResult::Consumed
            }
            KeyCode::Char(c) => {
                self.insert_char(c);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        };

        if result == EventResult::Consumed {
            let new_value = self.value();
            if new_value != old_value {
                self.push_event(InputEvent::Changed(new_value));
            }
        }

        result
    }
}
