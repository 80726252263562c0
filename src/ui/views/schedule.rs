//! Appointment scheduling: a month calendar and a row of time slots.
//!
//! The calendar shows a single fixed month. Day arithmetic is clamped to
//! that month; moving past its first or last day stops at the edge.

use chrono::{Datelike, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::data::Doctor;
use crate::ui::components::{choice_line, link_line, render_button};
use crate::ui::theme::theme;

/// Year of the bookable month.
pub const SCHEDULE_YEAR: i32 = 2023;
/// The bookable month (November).
pub const SCHEDULE_MONTH: u32 = 11;
/// Day selected when the screen opens.
pub const DEFAULT_DAY: u32 = 20;

/// Bookable times, in display order.
pub const TIME_SLOTS: [&str; 6] = [
    "09:00 AM", "10:00 AM", "11:00 AM", "02:00 PM", "03:00 PM", "04:00 PM",
];
/// Slot selected when the screen opens (10:00 AM).
const DEFAULT_SLOT: usize = 1;
const SLOTS_PER_ROW: usize = 3;

const WEEKDAY_HEADER: &str = "Mo Tu We Th Fr Sa Su";

/// Actions that can be returned from the schedule view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleAction {
    /// Return to the doctor search.
    Back,
    /// Book the selected date and time.
    Confirm { date: String, time: String },
}

/// Date and time selection for one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleView {
    year: i32,
    month: u32,
    day: u32,
    slot: usize,
}

impl ScheduleView {
    /// Open on the default day and time of the bookable month.
    pub fn new() -> Self {
        Self::for_month(SCHEDULE_YEAR, SCHEDULE_MONTH, DEFAULT_DAY)
    }

    /// Open on a specific month. `day` is clamped into the month.
    pub fn for_month(year: i32, month: u32, day: u32) -> Self {
        let mut view = Self {
            year,
            month,
            day: 1,
            slot: DEFAULT_SLOT,
        };
        view.day = day.clamp(1, view.days_in_month());
        view
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Number of days in the displayed month.
    pub fn days_in_month(&self) -> u32 {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|first_of_next| first_of_next.pred_opt())
            .map_or(31, |last| last.day())
    }

    /// Column (0 = Monday) of the first day of the month.
    fn first_weekday(&self) -> u32 {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map_or(0, |first| first.weekday().num_days_from_monday())
    }

    /// The selected day of the month.
    #[cfg(test)]
    pub fn day(&self) -> u32 {
        self.day
    }

    /// The selected date as `YYYY-MM-DD`.
    pub fn selected_date(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// The selected time slot.
    pub fn selected_time(&self) -> &'static str {
        TIME_SLOTS[self.slot]
    }

    fn move_days(&mut self, delta: i64) {
        let last = i64::from(self.days_in_month());
        let day = (i64::from(self.day) + delta).clamp(1, last);
        self.day = u32::try_from(day).unwrap_or(1);
    }

    /// Handle keyboard input.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<ScheduleAction> {
        match key.code {
            KeyCode::Esc => Some(ScheduleAction::Back),
            KeyCode::Left | KeyCode::Char('h') => {
                self.move_days(-1);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.move_days(1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_days(-7);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_days(7);
                None
            }
            KeyCode::Tab => {
                self.slot = (self.slot + 1) % TIME_SLOTS.len();
                None
            }
            KeyCode::BackTab => {
                self.slot = (self.slot + TIME_SLOTS.len() - 1) % TIME_SLOTS.len();
                None
            }
            KeyCode::Enter => Some(ScheduleAction::Confirm {
                date: self.selected_date(),
                time: self.selected_time().to_string(),
            }),
            _ => None,
        }
    }

    /// Render the picker. `doctor` is the doctor being booked, if any.
    pub fn render(&self, frame: &mut Frame, area: Rect, doctor: Option<&Doctor>) {
        let t = theme();
        let chunks = Layout::vertical([
            Constraint::Length(1), // back
            Constraint::Length(1), // title
            Constraint::Length(4), // doctor
            Constraint::Length(1), // selected date
            Constraint::Length(8), // calendar
            Constraint::Length(1), // time heading
            Constraint::Length(2), // time slots
            Constraint::Length(1),
            Constraint::Length(3), // confirm
            Constraint::Min(0),
        ])
        .split(area);

        frame.render_widget(Paragraph::new(link_line("< BACK (Esc)", false)), chunks[0]);
        frame.render_widget(
            Paragraph::new(Line::styled("SCHEDULE APPOINTMENT", t.title()))
                .alignment(Alignment::Center),
            chunks[1],
        );

        let (name, specialty) = doctor.map_or(("N/A", "N/A"), |d| {
            (d.name.as_str(), d.specialty.as_str())
        });
        let doctor_box = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("DOCTOR: ", Style::default().fg(t.dim)),
                Span::styled(name.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(vec![
                Span::styled("SPECIALTY: ", Style::default().fg(t.dim)),
                Span::raw(specialty.to_string()),
            ]),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(t.dim)),
        );
        frame.render_widget(doctor_box, chunks[2]);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("SELECT DATE: ", Style::default().fg(t.dim)),
                Span::styled(
                    self.selected_date(),
                    Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
                ),
            ])),
            chunks[3],
        );
        frame.render_widget(
            Paragraph::new(self.calendar_lines()).alignment(Alignment::Center),
            chunks[4],
        );

        frame.render_widget(
            Paragraph::new(Line::styled("SELECT TIME (Tab):", Style::default().fg(t.dim))),
            chunks[5],
        );
        let (first_row, second_row) = TIME_SLOTS.split_at(SLOTS_PER_ROW);
        let (first_sel, second_sel) = if self.slot < SLOTS_PER_ROW {
            (self.slot, usize::MAX)
        } else {
            (usize::MAX, self.slot - SLOTS_PER_ROW)
        };
        frame.render_widget(
            Paragraph::new(vec![
                choice_line(first_row, first_sel),
                choice_line(second_row, second_sel),
            ])
            .alignment(Alignment::Center),
            chunks[6],
        );

        render_button(frame, chunks[8], "CONFIRM APPOINTMENT (Enter)", true);
    }

    /// Month title, weekday header and one line per week.
    fn calendar_lines(&self) -> Vec<Line<'static>> {
        let t = theme();
        let title = NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|first| first.format("%B %Y").to_string().to_uppercase())
            .unwrap_or_else(|| format!("{:04}-{:02}", self.year, self.month));

        let mut lines = vec![
            Line::styled(title, Style::default().add_modifier(Modifier::BOLD)),
            Line::styled(WEEKDAY_HEADER, Style::default().fg(t.dim)),
        ];

        let mut column = self.first_weekday();
        let mut week: Vec<Span<'static>> = vec![Span::raw("   "); column as usize];
        for day in 1..=self.days_in_month() {
            let style = if day == self.day {
                t.focused()
            } else {
                Style::default().fg(t.fg)
            };
            week.push(Span::styled(format!("{:>2}", day), style));
            week.push(Span::raw(" "));
            column += 1;
            if column % 7 == 0 {
                lines.push(Line::from(std::mem::take(&mut week)));
            }
        }
        if !week.is_empty() {
            lines.push(Line::from(week));
        }
        lines
    }
}

impl Default for ScheduleView {
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
    fn test_defaults() {
        let view = ScheduleView::new();
        assert_eq!(view.selected_date(), "2023-11-20");
        assert_eq!(view.selected_time(), "10:00 AM");
        assert_eq!(view.days_in_month(), 30);
    }

    #[test]
    fn test_days_in_other_months() {
        assert_eq!(ScheduleView::for_month(2024, 2, 1).days_in_month(), 29);
        assert_eq!(ScheduleView::for_month(2023, 2, 1).days_in_month(), 28);
        assert_eq!(ScheduleView::for_month(2023, 12, 1).days_in_month(), 31);
    }

    #[test]
    fn test_for_month_clamps_day() {
        assert_eq!(ScheduleView::for_month(2023, 11, 31).day(), 30);
        assert_eq!(ScheduleView::for_month(2023, 11, 0).day(), 1);
    }

    #[test]
    fn test_day_and_week_movement() {
        let mut view = ScheduleView::new();
        view.handle_input(key(KeyCode::Right));
        assert_eq!(view.day(), 21);
        view.handle_input(key(KeyCode::Up));
        assert_eq!(view.day(), 14);
        view.handle_input(key(KeyCode::Left));
        assert_eq!(view.day(), 13);
    }

    #[test]
    fn test_movement_is_clamped_to_month() {
        let mut view = ScheduleView::new();
        for _ in 0..10 {
            view.handle_input(key(KeyCode::Down));
        }
        assert_eq!(view.day(), 30);
        for _ in 0..10 {
            view.handle_input(key(KeyCode::Up));
        }
        assert_eq!(view.day(), 1);
        view.handle_input(key(KeyCode::Left));
        assert_eq!(view.day(), 1);
    }

    #[test]
    fn test_time_slot_cycles() {
        let mut view = ScheduleView::new();
        view.handle_input(key(KeyCode::BackTab));
        view.handle_input(key(KeyCode::BackTab));
        assert_eq!(view.selected_time(), "04:00 PM");
        view.handle_input(key(KeyCode::Tab));
        assert_eq!(view.selected_time(), "09:00 AM");
    }

    #[test]
    fn test_confirm_returns_selection() {
        let mut view = ScheduleView::new();
        view.handle_input(key(KeyCode::Right));
        view.handle_input(key(KeyCode::Tab));
        assert_eq!(
            view.handle_input(key(KeyCode::Enter)),
            Some(ScheduleAction::Confirm {
                date: "2023-11-21".to_string(),
                time: "11:00 AM".to_string(),
            })
        );
        assert_eq!(view.handle_input(key(KeyCode::Esc)), Some(ScheduleAction::Back));
    }

    #[test]
    fn test_calendar_layout() {
        let view = ScheduleView::new();
        let lines = view.calendar_lines();
        // Title, header and five weeks: November 2023 starts on a Wednesday
        assert_eq!(lines.len(), 7);
        let first_week: String = lines[2].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(first_week.starts_with("       1"));
    }

    #[test]
    fn test_render_with_doctor() {
        let doctor = Doctor::new(3, "Dr. Garcia", "Cardiology", "Mon/Wed/Fri 09:00 - 15:00");
        let view = ScheduleView::new();
        let text = render_text(50, 30, |f| view.render(f, f.area(), Some(&doctor)));
        assert!(text.contains("Dr. Garcia"));
        assert!(text.contains("Cardiology"));
        assert!(text.contains("NOVEMBER 2023"));
        assert!(text.contains("[ 10:00 AM ]"));
    }

    #[test]
    fn test_render_without_doctor() {
        let view = ScheduleView::new();
        let text = render_text(50, 30, |f| view.render(f, f.area(), None));
        assert!(text.contains("DOCTOR: N/A"));
    }
}
