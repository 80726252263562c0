//! Registration form. Nothing typed here is stored.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::ui::components::{link_line, render_button, FocusRing, TextInput};
use crate::ui::theme::theme;

/// Focus slots: the back link, one per field, then the register button.
const BACK_LINK: usize = 0;
const FIRST_FIELD: usize = 1;
const FIELD_COUNT: usize = 5;
const REGISTER_BUTTON: usize = FIRST_FIELD + FIELD_COUNT;

/// Actions that can be returned from the registration view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterAction {
    /// Return to the login screen without registering.
    Back,
    /// Submit the form.
    Complete,
}

/// The registration form.
#[derive(Debug, Clone)]
pub struct RegisterView {
    fields: [TextInput; FIELD_COUNT],
    focus: FocusRing,
}

impl RegisterView {
    pub fn new() -> Self {
        let mut focus = FocusRing::new(REGISTER_BUTTON + 1);
        focus.set(FIRST_FIELD);
        Self {
            fields: [
                TextInput::new("FULL NAME"),
                TextInput::new("ID NUMBER"),
                TextInput::new("PHONE NUMBER"),
                TextInput::new("EMAIL"),
                TextInput::masked("PASSWORD"),
            ],
            focus,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Index into `fields` of the focused field, if a field has focus.
    fn focused_field(&self) -> Option<usize> {
        let index = self.focus.index();
        (FIRST_FIELD..REGISTER_BUTTON)
            .contains(&index)
            .then(|| index - FIRST_FIELD)
    }

    pub fn is_input_focused(&self) -> bool {
        self.focused_field().is_some()
    }

    /// Handle keyboard input.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<RegisterAction> {
        match key.code {
            KeyCode::Esc => Some(RegisterAction::Back),
            KeyCode::Tab | KeyCode::Down => {
                self.focus.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus.prev();
                None
            }
            KeyCode::Enter => match self.focus.index() {
                BACK_LINK => Some(RegisterAction::Back),
                REGISTER_BUTTON => Some(RegisterAction::Complete),
                _ => {
                    self.focus.next();
                    None
                }
            },
            _ => {
                if let Some(field) = self.focused_field() {
                    self.fields[field].handle_input(key);
                }
                None
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let mut constraints = vec![
            Constraint::Length(1), // back link
            Constraint::Length(1), // title
        ];
        constraints.extend([Constraint::Length(3); FIELD_COUNT]);
        constraints.extend([
            Constraint::Length(1),
            Constraint::Length(3), // register
            Constraint::Min(0),
        ]);
        let chunks = Layout::vertical(constraints).split(area);

        frame.render_widget(
            Paragraph::new(link_line("< BACK", self.focus.is(BACK_LINK))),
            chunks[0],
        );
        frame.render_widget(
            Paragraph::new(Line::styled("CREATE ACCOUNT", t.title())).alignment(Alignment::Center),
            chunks[1],
        );
        for (i, field) in self.fields.iter().enumerate() {
            field.render(frame, chunks[2 + i], self.focus.is(FIRST_FIELD + i));
        }
        render_button(
            frame,
            chunks[3 + FIELD_COUNT],
            "REGISTER",
            self.focus.is(REGISTER_BUTTON),
        );
    }
}

impl Default for RegisterView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_utils::render_text;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_starts_on_first_field() {
        let view = RegisterView::new();
        assert_eq!(view.focused_field(), Some(0));
        assert!(view.is_input_focused());
    }

    #[test]
    fn test_fill_form_and_register() {
        let mut view = RegisterView::new();
        for value in ["Ana Peña", "12345", "555-0100", "ana@mail.com", "pw"] {
            for c in value.chars() {
                view.handle_input(key(KeyCode::Char(c)));
            }
            assert_eq!(view.handle_input(key(KeyCode::Enter)), None);
        }
        assert_eq!(view.fields[0].value(), "Ana Peña");
        assert_eq!(view.fields[4].value(), "pw");
        assert!(!view.is_input_focused());
        assert_eq!(
            view.handle_input(key(KeyCode::Enter)),
            Some(RegisterAction::Complete)
        );
    }

    #[test]
    fn test_back_link_and_escape() {
        let mut view = RegisterView::new();
        assert_eq!(view.handle_input(key(KeyCode::Esc)), Some(RegisterAction::Back));

        view.handle_input(key(KeyCode::Up));
        assert!(view.focus.is(BACK_LINK));
        assert_eq!(view.handle_input(key(KeyCode::Enter)), Some(RegisterAction::Back));
    }

    #[test]
    fn test_render_lists_all_fields() {
        let view = RegisterView::new();
        let text = render_text(40, 24, |f| view.render(f, f.area()));
        for label in ["< BACK", "FULL NAME", "ID NUMBER", "PHONE NUMBER", "EMAIL", "PASSWORD"] {
            assert!(text.contains(label), "missing {label}");
        }
        assert!(text.contains("REGISTER"));
    }
}
