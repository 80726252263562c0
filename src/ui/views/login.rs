//! Login screen.
//!
//! Two inputs, a log in button and a link to the registration form. The
//! credentials are not checked: logging in always succeeds.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use tracing::debug;

use crate::ui::components::{link_line, render_button, FocusRing, TextInput};
use crate::ui::theme::theme;

const EMAIL: usize = 0;
const PASSWORD: usize = 1;
const LOGIN_BUTTON: usize = 2;
const REGISTER_LINK: usize = 3;

/// Actions that can be returned from the login view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAction {
    /// Log in and open the dashboard.
    Login,
    /// Open the registration form.
    Register,
}

/// The login form.
#[derive(Debug, Clone)]
pub struct LoginView {
    email: TextInput,
    password: TextInput,
    focus: FocusRing,
}

impl LoginView {
    /// Create an empty login form with the email field focused.
    pub fn new() -> Self {
        Self {
            email: TextInput::new("EMAIL").with_placeholder("example@email.com"),
            password: TextInput::masked("PASSWORD"),
            focus: FocusRing::new(4),
        }
    }

    /// Clear both fields and focus the email field.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether keystrokes currently go into a text field.
    pub fn is_input_focused(&self) -> bool {
        self.focus.index() <= PASSWORD
    }

    /// Handle keyboard input.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<LoginAction> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus.prev();
                None
            }
            KeyCode::Enter => match self.focus.index() {
                LOGIN_BUTTON => {
                    debug!(email = %self.email.value(), "Log in submitted");
                    Some(LoginAction::Login)
                }
                REGISTER_LINK => Some(LoginAction::Register),
                _ => {
                    self.focus.next();
                    None
                }
            },
            _ => {
                match self.focus.index() {
                    EMAIL => self.email.handle_input(key),
                    PASSWORD => self.password.handle_input(key),
                    _ => false,
                };
                None
            }
        }
    }

    /// Render the form.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let chunks = Layout::vertical([
            Constraint::Length(1), // spacer
            Constraint::Length(1), // title
            Constraint::Length(1), // spacer
            Constraint::Length(3), // email
            Constraint::Length(3), // password
            Constraint::Length(1), // spacer
            Constraint::Length(3), // log in
            Constraint::Length(1), // spacer
            Constraint::Length(1), // register link
            Constraint::Min(0),
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(Line::styled("LOG IN", t.title())).alignment(Alignment::Center),
            chunks[1],
        );
        self.email.render(frame, chunks[3], self.focus.is(EMAIL));
        self.password.render(frame, chunks[4], self.focus.is(PASSWORD));
        render_button(frame, chunks[6], "LOGIN", self.focus.is(LOGIN_BUTTON));
        frame.render_widget(
            Paragraph::new(link_line("REGISTER NEW ACCOUNT", self.focus.is(REGISTER_LINK)))
                .alignment(Alignment::Center),
            chunks[8],
        );
    }
}

impl Default for LoginView {
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

    fn type_text(view: &mut LoginView, text: &str) {
        for c in text.chars() {
            view.handle_input(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut view = LoginView::new();
        type_text(&mut view, "ana@mail.com");
        view.handle_input(key(KeyCode::Tab));
        type_text(&mut view, "pw");

        assert_eq!(view.email.value(), "ana@mail.com");
        assert_eq!(view.password.value(), "pw");
    }

    #[test]
    fn test_enter_on_field_advances_focus() {
        let mut view = LoginView::new();
        assert_eq!(view.handle_input(key(KeyCode::Enter)), None);
        assert!(view.focus.is(PASSWORD));
    }

    #[test]
    fn test_login_with_empty_fields_succeeds() {
        let mut view = LoginView::new();
        view.focus.set(LOGIN_BUTTON);
        assert_eq!(view.handle_input(key(KeyCode::Enter)), Some(LoginAction::Login));
    }

    #[test]
    fn test_register_link() {
        let mut view = LoginView::new();
        view.handle_input(key(KeyCode::BackTab));
        assert!(view.focus.is(REGISTER_LINK));
        assert_eq!(view.handle_input(key(KeyCode::Enter)), Some(LoginAction::Register));
    }

    #[test]
    fn test_input_focus_tracking() {
        let mut view = LoginView::new();
        assert!(view.is_input_focused());
        view.focus.set(LOGIN_BUTTON);
        assert!(!view.is_input_focused());
    }

    #[test]
    fn test_reset_clears_fields() {
        let mut view = LoginView::new();
        type_text(&mut view, "someone");
        view.handle_input(key(KeyCode::Tab));
        view.reset();
        assert!(view.email.is_empty());
        assert!(view.focus.is(EMAIL));
    }

    #[test]
    fn test_render_masks_password() {
        let mut view = LoginView::new();
        view.handle_input(key(KeyCode::Tab));
        type_text(&mut view, "secret");

        let text = render_text(40, 20, |f| view.render(f, f.area()));
        assert!(text.contains("LOG IN"));
        assert!(text.contains("******"));
        assert!(!text.contains("secret"));
        assert!(text.contains("REGISTER NEW ACCOUNT"));
    }
}
