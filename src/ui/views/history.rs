//! Medical history: completed appointments with diagnosis and notes.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

use crate::data::Appointment;
use crate::ui::components::link_line;
use crate::ui::theme::theme;

/// Actions that can be returned from the history view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryAction {
    /// Return to the dashboard.
    Back,
}

/// Scroll state for the history list.
#[derive(Debug, Clone, Default)]
pub struct MedicalHistoryView {
    scroll: usize,
    /// Content height from the last render.
    total_lines: usize,
    /// Viewport height from the last render.
    visible_height: usize,
}

impl MedicalHistoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    #[cfg(test)]
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    fn max_scroll(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_height)
    }

    /// Handle keyboard input.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<HistoryAction> {
        match key.code {
            KeyCode::Esc => Some(HistoryAction::Back),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll = (self.scroll + 1).min(self.max_scroll());
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.scroll = 0;
                None
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.scroll = self.max_scroll();
                None
            }
            _ => None,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, history: &[Appointment]) {
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
            Paragraph::new(Line::styled("MEDICAL HISTORY", t.title()))
                .alignment(Alignment::Center),
            chunks[1],
        );

        let lines = if history.is_empty() {
            vec![Line::styled("NO RECORDS FOUND", Style::default().fg(t.dim))]
        } else {
            history.iter().flat_map(record_lines).collect()
        };

        self.total_lines = lines.len();
        self.visible_height = chunks[3].height as usize;
        self.scroll = self.scroll.min(self.max_scroll());

        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((self.scroll as u16, 0)),
            chunks[3],
        );

        if self.total_lines > self.visible_height {
            let mut state = ScrollbarState::new(self.max_scroll()).position(self.scroll);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                chunks[3],
                &mut state,
            );
        }
    }
}

/// Lines for one record, ending with a separator.
fn record_lines(record: &Appointment) -> Vec<Line<'static>> {
    let t = theme();
    let label = Style::default().fg(t.dim);
    vec![
        Line::from(vec![
            Span::styled(
                record.date.clone(),
                Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                record.doctor_name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("DIAGNOSIS: ", label),
            Span::raw(record.diagnosis.clone().unwrap_or_default()),
        ]),
        Line::styled("NOTES:", label),
        Line::styled(
            record.notes.clone().unwrap_or_default(),
            Style::default().add_modifier(Modifier::ITALIC),
        ),
        Line::styled("─".repeat(24), Style::default().fg(t.dim)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MockData;
    use crate::ui::test_utils::render_text;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_render_records() {
        let history = MockData::seed().history;
        let mut view = MedicalHistoryView::new();
        let text = render_text(50, 20, |f| view.render(f, f.area(), &history));
        assert!(text.contains("MEDICAL HISTORY"));
        assert!(text.contains("2023-10-05  Dr. Garcia"));
        assert!(text.contains("DIAGNOSIS: Common Cold"));
        assert!(text.contains("Patient is in good health."));
    }

    #[test]
    fn test_scroll_is_bounded_by_content() {
        let history = MockData::seed().history;
        let mut view = MedicalHistoryView::new();
        // Three content rows for ten lines of records
        render_text(50, 6, |f| view.render(f, f.area(), &history));

        for _ in 0..20 {
            view.handle_input(key(KeyCode::Char('j')));
        }
        assert_eq!(view.scroll(), 7);
        view.handle_input(key(KeyCode::Char('g')));
        assert_eq!(view.scroll(), 0);
        view.handle_input(key(KeyCode::Char('k')));
        assert_eq!(view.scroll(), 0);
    }

    #[test]
    fn test_no_scroll_when_content_fits() {
        let history = MockData::seed().history;
        let mut view = MedicalHistoryView::new();
        render_text(50, 30, |f| view.render(f, f.area(), &history));
        view.handle_input(key(KeyCode::Down));
        assert_eq!(view.scroll(), 0);
    }

    #[test]
    fn test_escape_goes_back() {
        let mut view = MedicalHistoryView::new();
        assert_eq!(view.handle_input(key(KeyCode::Esc)), Some(HistoryAction::Back));
    }
}
