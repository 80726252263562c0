//! Labeled text input component.
//!
//! Used for the login and registration forms and the doctor search box.
//! Supports character input and deletion, cursor movement, password masking
//! and a placeholder. The cursor counts characters, not bytes, so accented
//! names are edited correctly.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::theme;

/// A single-line text input with a label.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Label shown in the top border.
    label: String,
    /// The current input value.
    value: String,
    /// Cursor position in characters.
    cursor: usize,
    /// Whether to mask the input (for passwords).
    masked: bool,
    /// Placeholder text shown when empty.
    placeholder: String,
}

impl TextInput {
    /// Create a new empty input with a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Create a new masked input (for passwords).
    pub fn masked(label: impl Into<String>) -> Self {
        Self {
            masked: true,
            ..Self::new(label)
        }
    }

    /// Set the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Get the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the value and move the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.char_count();
    }

    /// Clear the input.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Check if the input is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Get the cursor position in characters.
    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the display value (masked if needed).
    pub fn display_value(&self) -> String {
        if self.masked {
            "*".repeat(self.char_count())
        } else {
            self.value.clone()
        }
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Byte offset of a character index.
    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Handle keyboard input.
    ///
    /// Returns true if the value was modified. Keys the input does not use
    /// (Enter, Tab, Esc, arrows up/down) are left for the owning view.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                let changed = !self.is_empty();
                self.clear();
                changed
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                let at = self.byte_index(self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
                true
            }
            (KeyCode::Backspace, _) if self.cursor > 0 => {
                self.cursor -= 1;
                let at = self.byte_index(self.cursor);
                self.value.remove(at);
                true
            }
            (KeyCode::Delete, _) if self.cursor < self.char_count() => {
                let at = self.byte_index(self.cursor);
                self.value.remove(at);
                true
            }
            (KeyCode::Left, _) => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            (KeyCode::Right, _) => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                false
            }
            (KeyCode::Home, _) => {
                self.cursor = 0;
                false
            }
            (KeyCode::End, _) => {
                self.cursor = self.char_count();
                false
            }
            _ => false,
        }
    }

    /// Render the input as a bordered box with the label in the border.
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let t = theme();
        let showing_placeholder = self.is_empty() && !self.placeholder.is_empty();

        let (display, style) = if showing_placeholder {
            (self.placeholder.clone(), Style::default().fg(t.dim))
        } else {
            (self.display_value(), Style::default().fg(t.fg))
        };

        let title_style = if focused {
            Style::default().fg(t.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(t.fg)
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", self.label), title_style))
            .borders(Borders::ALL)
            .border_style(t.border(focused));

        frame.render_widget(Paragraph::new(display).style(style).block(block), area);

        if focused {
            let cursor_x = area.x + 1 + self.cursor as u16;
            if cursor_x < area.x + area.width.saturating_sub(1) {
                frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
            }
        }
    }
}
