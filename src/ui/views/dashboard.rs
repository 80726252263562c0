//! Dashboard: greeting and the main menu.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::data::Screen;
use crate::ui::components::{render_button, FocusRing};
use crate::ui::theme::theme;

/// Actions that can be returned from the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    /// Open another screen.
    Navigate(Screen),
    /// End the session.
    Logout,
}

/// Menu entries in display order.
const MENU: [(&str, DashboardAction); 5] = [
    ("SEARCH DOCTORS", DashboardAction::Navigate(Screen::SearchDoctors)),
    ("VIEW APPOINTMENTS", DashboardAction::Navigate(Screen::Appointments)),
    ("MEDICAL HISTORY", DashboardAction::Navigate(Screen::MedicalHistory)),
    ("REMINDER SETTINGS", DashboardAction::Navigate(Screen::Reminders)),
    ("LOGOUT", DashboardAction::Logout),
];

/// The dashboard menu.
#[derive(Debug, Clone)]
pub struct DashboardView {
    focus: FocusRing,
}

impl DashboardView {
    pub fn new() -> Self {
        Self {
            focus: FocusRing::new(MENU.len()),
        }
    }

    pub fn reset(&mut self) {
        self.focus.reset();
    }

    /// The highlighted menu entry.
    #[cfg(test)]
    pub fn selected(&self) -> usize {
        self.focus.index()
    }

    /// Handle keyboard input.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<DashboardAction> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
                self.focus.next();
                None
            }
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
                self.focus.prev();
                None
            }
            KeyCode::Enter => Some(MENU[self.focus.index()].1.clone()),
            _ => None,
        }
    }

    /// Render the greeting and menu for `patient_name`.
    pub fn render(&self, frame: &mut Frame, area: Rect, patient_name: &str) {
        let t = theme();
        let mut constraints = vec![Constraint::Length(4), Constraint::Length(1)];
        constraints.extend([Constraint::Length(3); MENU.len()]);
        constraints.push(Constraint::Min(0));
        let chunks = Layout::vertical(constraints).split(area);

        let greeting = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("WELCOME, {}", patient_name),
                Style::default().fg(t.fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "What would you like to do today?",
                Style::default().fg(t.dim),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(t.dim)),
        );
        frame.render_widget(greeting, chunks[0]);

        for (i, (label, _)) in MENU.iter().enumerate() {
            render_button(frame, chunks[2 + i], label, self.focus.is(i));
        }
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}
