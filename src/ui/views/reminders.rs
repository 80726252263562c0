//! Reminder preferences.
//!
//! Changes only last for the session and no reminder is ever sent. The
//! example text previews what a reminder for the next appointment would say.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::config::ReminderLead;
use crate::data::Appointment;
use crate::ui::components::{choice_line, link_line};
use crate::ui::theme::theme;

/// Used for the example when there is no upcoming appointment.
const EXAMPLE_DOCTOR: &str = "Dr. Smith";
const EXAMPLE_TIME: &str = "10:00 AM";

/// Actions that can be returned from the reminders view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemindersAction {
    /// Return to the dashboard.
    Back,
}

/// Reminder settings for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemindersView {
    notifications_enabled: bool,
    lead: ReminderLead,
}

impl RemindersView {
    /// Start from the configured defaults.
    pub fn new(notifications_enabled: bool, lead: ReminderLead) -> Self {
        Self {
            notifications_enabled,
            lead,
        }
    }

    #[cfg(test)]
    pub fn notifications_enabled(&self) -> bool {
        self.notifications_enabled
    }

    #[cfg(test)]
    pub fn lead(&self) -> ReminderLead {
        self.lead
    }

    /// Preview text for a reminder about `next`.
    pub fn example_text(&self, next: Option<&Appointment>) -> String {
        let (doctor, time) = next.map_or((EXAMPLE_DOCTOR, EXAMPLE_TIME), |appointment| {
            (appointment.doctor_name.as_str(), appointment.time.as_str())
        });
        format!(
            "MEDICITAS ALERT: You have an upcoming appointment with {} {} at {}.",
            doctor,
            self.lead.phrase(),
            time
        )
    }

    /// Handle keyboard input.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<RemindersAction> {
        match key.code {
            KeyCode::Esc => Some(RemindersAction::Back),
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.notifications_enabled = !self.notifications_enabled;
                tracing::debug!(enabled = self.notifications_enabled, "Notifications toggled");
                None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.lead = self.lead.prev();
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.lead = self.lead.next();
                None
            }
            _ => None,
        }
    }

    /// Render the settings. `next` is the first upcoming appointment.
    pub fn render(&self, frame: &mut Frame, area: Rect, next: Option<&Appointment>) {
        let t = theme();
        let chunks = Layout::vertical([
            Constraint::Length(1), // back
            Constraint::Length(1), // title
            Constraint::Length(1),
            Constraint::Length(3), // toggle
            Constraint::Length(1),
            Constraint::Length(5), // example
            Constraint::Length(1),
            Constraint::Length(1), // lead heading
            Constraint::Length(1), // lead choice
            Constraint::Min(0),
        ])
        .split(area);

        frame.render_widget(Paragraph::new(link_line("< BACK (Esc)", false)), chunks[0]);
        frame.render_widget(
            Paragraph::new(Line::styled("REMINDER SETTINGS", t.title()))
                .alignment(Alignment::Center),
            chunks[1],
        );

        let (switch, switch_style) = if self.notifications_enabled {
            ("[■ ON ]", Style::default().fg(t.success).add_modifier(Modifier::BOLD))
        } else {
            ("[ OFF□]", Style::default().fg(t.dim))
        };
        let toggle = Paragraph::new(Line::from(vec![
            Span::styled(
                "ENABLE NOTIFICATIONS  ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(switch, switch_style),
        ]))
        .block(Block::default().borders(Borders::ALL).title(" Space "));
        frame.render_widget(toggle, chunks[3]);

        let example_style = if self.notifications_enabled {
            Style::default().add_modifier(Modifier::ITALIC)
        } else {
            Style::default().fg(t.dim).add_modifier(Modifier::ITALIC)
        };
        let example = Paragraph::new(Line::styled(
            format!("\"{}\"", self.example_text(next)),
            example_style,
        ))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" EXAMPLE REMINDER "),
        );
        frame.render_widget(example, chunks[5]);

        frame.render_widget(
            Paragraph::new(Line::styled(
                "REMINDER TIME (BEFORE APPOINTMENT)",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            chunks[7],
        );
        let labels: Vec<&str> = ReminderLead::ALL.iter().map(|lead| lead.label()).collect();
        let selected = ReminderLead::ALL
            .iter()
            .position(|lead| *lead == self.lead)
            .unwrap_or_default();
        frame.render_widget(
            Paragraph::new(choice_line(&labels, selected)).alignment(Alignment::Center),
            chunks[8],
        );
    }
}

impl Default for RemindersView {
    fn default() -> Self {
        Self::new(true, ReminderLead::default())
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
    fn test_example_without_appointment() {
        let view = RemindersView::default();
        assert_eq!(
            view.example_text(None),
            "MEDICITAS ALERT: You have an upcoming appointment with Dr. Smith tomorrow at 10:00 AM."
        );
    }

    #[test]
    fn test_example_follows_appointment_and_lead() {
        let mut view = RemindersView::default();
        view.handle_input(key(KeyCode::Right));
        let appointment = Appointment::upcoming(4, "Dr. Garcia", "2023-11-22", "02:00 PM");
        assert_eq!(
            view.example_text(Some(&appointment)),
            "MEDICITAS ALERT: You have an upcoming appointment with Dr. Garcia in two days at 02:00 PM."
        );
    }

    #[test]
    fn test_toggle_and_lead_changes() {
        let mut view = RemindersView::new(true, ReminderLead::OneHour);
        view.handle_input(key(KeyCode::Char(' ')));
        assert!(!view.notifications_enabled());
        view.handle_input(key(KeyCode::Left));
        assert_eq!(view.lead(), ReminderLead::OneHour);
        view.handle_input(key(KeyCode::Right));
        assert_eq!(view.lead(), ReminderLead::TwentyFourHours);
    }

    #[test]
    fn test_escape_goes_back() {
        let mut view = RemindersView::default();
        assert_eq!(view.handle_input(key(KeyCode::Esc)), Some(RemindersAction::Back));
    }

    #[test]
    fn test_render() {
        let view = RemindersView::default();
        let text = render_text(48, 24, |f| view.render(f, f.area(), None));
        assert!(text.contains("ENABLE NOTIFICATIONS"));
        assert!(text.contains("[■ ON ]"));
        assert!(text.contains("EXAMPLE REMINDER"));
        assert!(text.contains("[ 24 HRS ]"));
    }
}
