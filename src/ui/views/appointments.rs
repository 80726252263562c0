//! Upcoming appointments with cancellation.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::data::Appointment;
use crate::ui::components::link_line;
use crate::ui::theme::theme;

/// Actions that can be returned from the appointments view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppointmentsAction {
    /// Return to the dashboard.
    Back,
    /// Cancel the appointment with this id.
    Cancel(u32),
}

/// Selection state for the appointment list.
#[derive(Debug, Clone, Default)]
pub struct AppointmentsView {
    selected: usize,
    list_state: ListState,
}

impl AppointmentsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the highlighted appointment.
    #[cfg(test)]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Keep the selection inside a list of `len` appointments.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Handle keyboard input.
    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        appointments: &[Appointment],
    ) -> Option<AppointmentsAction> {
        match key.code {
            KeyCode::Esc => Some(AppointmentsAction::Back),
            KeyCode::Char('j') | KeyCode::Down => {
                if self.selected + 1 < appointments.len() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Char('c') | KeyCode::Delete => appointments
                .get(self.selected)
                .map(|appointment| AppointmentsAction::Cancel(appointment.id)),
            _ => None,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, appointments: &[Appointment]) {
        let t = theme();
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

        frame.render_widget(Paragraph::new(link_line("< BACK (Esc)", false)), chunks[0]);
        frame.render_widget(
            Paragraph::new(Line::styled("UPCOMING APPOINTMENTS", t.title()))
                .alignment(Alignment::Center),
            chunks[1],
        );

        if appointments.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::styled(
                    "NO APPOINTMENTS FOUND",
                    Style::default().fg(t.dim),
                ))
                .alignment(Alignment::Center),
                chunks[3],
            );
            return;
        }

        self.clamp_selection(appointments.len());
        let items: Vec<ListItem> = appointments
            .iter()
            .enumerate()
            .map(|(i, appointment)| appointment_card(appointment, i == self.selected))
            .collect();
        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol("▌ ");

        self.list_state.select(Some(self.selected));
        frame.render_stateful_widget(list, chunks[3], &mut self.list_state);
    }
}

fn appointment_card(appointment: &Appointment, selected: bool) -> ListItem<'static> {
    let t = theme();
    let label = Style::default().fg(t.dim);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                appointment.doctor_name.clone(),
                Style::default().fg(t.fg).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(appointment.status.label(), Style::default().fg(t.success)),
        ]),
        Line::from(vec![
            Span::styled("DATE: ", label),
            Span::raw(appointment.date.clone()),
        ]),
        Line::from(vec![
            Span::styled("TIME: ", label),
            Span::raw(appointment.time.clone()),
        ]),
    ];
    if selected {
        lines.push(Line::from(Span::styled(
            "[ CANCEL APPOINTMENT (c) ]",
            Style::default().fg(t.error).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));
    ListItem::new(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_utils::render_text;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample() -> Vec<Appointment> {
        vec![
            Appointment::upcoming(1, "Dr. Smith", "2023-11-20", "10:00 AM"),
            Appointment::upcoming(4, "Dr. Garcia", "2023-11-22", "02:00 PM"),
        ]
    }

    #[test]
    fn test_cancel_selected() {
        let appointments = sample();
        let mut view = AppointmentsView::new();
        assert_eq!(
            view.handle_input(key(KeyCode::Char('c')), &appointments),
            Some(AppointmentsAction::Cancel(1))
        );
        view.handle_input(key(KeyCode::Down), &appointments);
        assert_eq!(
            view.handle_input(key(KeyCode::Delete), &appointments),
            Some(AppointmentsAction::Cancel(4))
        );
    }

    #[test]
    fn test_cancel_on_empty_list() {
        let mut view = AppointmentsView::new();
        assert_eq!(view.handle_input(key(KeyCode::Char('c')), &[]), None);
    }

    #[test]
    fn test_selection_bounds() {
        let appointments = sample();
        let mut view = AppointmentsView::new();
        view.handle_input(key(KeyCode::Up), &appointments);
        assert_eq!(view.selected(), 0);
        for _ in 0..5 {
            view.handle_input(key(KeyCode::Char('j')), &appointments);
        }
        assert_eq!(view.selected(), 1);

        view.clamp_selection(1);
        assert_eq!(view.selected(), 0);
        view.clamp_selection(0);
        assert_eq!(view.selected(), 0);
    }

    #[test]
    fn test_escape_goes_back() {
        let mut view = AppointmentsView::new();
        assert_eq!(
            view.handle_input(key(KeyCode::Esc), &sample()),
            Some(AppointmentsAction::Back)
        );
    }

    #[test]
    fn test_render_cards() {
        let appointments = sample();
        let mut view = AppointmentsView::new();
        let text = render_text(44, 20, |f| view.render(f, f.area(), &appointments));
        assert!(text.contains("UPCOMING APPOINTMENTS"));
        assert!(text.contains("Dr. Smith  UPCOMING"));
        assert!(text.contains("DATE: 2023-11-20"));
        assert!(text.contains("TIME: 10:00 AM"));
        assert!(text.contains("CANCEL APPOINTMENT"));
    }

    #[test]
    fn test_render_empty() {
        let mut view = AppointmentsView::new();
        let text = render_text(44, 12, |f| view.render(f, f.area(), &[]));
        assert!(text.contains("NO APPOINTMENTS FOUND"));
    }
}
