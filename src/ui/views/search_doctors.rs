//! Doctor search: a query box, specialty shortcuts and the filtered list.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use tracing::debug;

use crate::data::{filter_doctors, Doctor};
use crate::ui::components::{choice_line, link_line, TextInput};
use crate::ui::theme::theme;

/// Specialty shortcuts: chip label and the query it fills in.
const SPECIALTY_CHIPS: [(&str, &str); 3] = [
    ("GENERAL", "general"),
    ("PEDIATRICS", "pediatrics"),
    ("CARDIOLOGY", "cardiology"),
];

/// Actions that can be returned from the search view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Return to the dashboard.
    Back,
    /// Schedule an appointment with this doctor.
    Book(Doctor),
}

/// Search screen state. The doctor list itself is owned by the app.
#[derive(Debug, Clone)]
pub struct SearchDoctorsView {
    query: TextInput,
    /// Index into the filtered results.
    selected: usize,
    /// Chip whose query is currently filled in, if any.
    chip: Option<usize>,
    list_state: ListState,
}

impl SearchDoctorsView {
    pub fn new() -> Self {
        Self {
            query: TextInput::new("SEARCH").with_placeholder("SEARCH BY NAME OR SPECIALTY..."),
            selected: 0,
            chip: None,
            list_state: ListState::default(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The current query text.
    #[cfg(test)]
    pub fn query(&self) -> &str {
        self.query.value()
    }

    /// Doctors matching the current query.
    pub fn results<'a>(&self, doctors: &'a [Doctor]) -> Vec<&'a Doctor> {
        filter_doctors(doctors, self.query.value())
    }

    /// Fill the query from the next (or previous) specialty chip. Cycling
    /// past the last chip clears the query.
    fn cycle_chip(&mut self, forward: bool) {
        let count = SPECIALTY_CHIPS.len();
        self.chip = match (self.chip, forward) {
            (None, true) => Some(0),
            (None, false) => Some(count - 1),
            (Some(i), true) if i + 1 < count => Some(i + 1),
            (Some(i), false) if i > 0 => Some(i - 1),
            (Some(_), _) => None,
        };
        match self.chip {
            Some(i) => self.query.set_value(SPECIALTY_CHIPS[i].1),
            None => self.query.clear(),
        }
        self.selected = 0;
    }

    /// Handle keyboard input. Typing always edits the query.
    pub fn handle_input(&mut self, key: KeyEvent, doctors: &[Doctor]) -> Option<SearchAction> {
        match key.code {
            KeyCode::Esc => Some(SearchAction::Back),
            KeyCode::Enter => {
                let doctor = self.results(doctors).get(self.selected).map(|d| (*d).clone());
                if doctor.is_none() {
                    debug!(query = %self.query.value(), "Nothing to book");
                }
                doctor.map(SearchAction::Book)
            }
            KeyCode::Down => {
                let count = self.results(doctors).len();
                if self.selected + 1 < count {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Tab => {
                self.cycle_chip(true);
                None
            }
            KeyCode::BackTab => {
                self.cycle_chip(false);
                None
            }
            _ => {
                if self.query.handle_input(key) {
                    self.selected = 0;
                    self.chip = None;
                }
                None
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, doctors: &[Doctor]) {
        let t = theme();
        let chunks = Layout::vertical([
            Constraint::Length(1), // back
            Constraint::Length(1), // title
            Constraint::Length(3), // query
            Constraint::Length(1), // chips heading
            Constraint::Length(1), // chips
            Constraint::Length(1),
            Constraint::Min(0), // results
        ])
        .split(area);

        frame.render_widget(Paragraph::new(link_line("< BACK (Esc)", false)), chunks[0]);
        frame.render_widget(
            Paragraph::new(Line::styled("FIND A DOCTOR", t.title())).alignment(Alignment::Center),
            chunks[1],
        );
        self.query.render(frame, chunks[2], true);

        frame.render_widget(
            Paragraph::new(Line::styled(
                "FILTER BY SPECIALTY (Tab):",
                Style::default().fg(t.dim),
            )),
            chunks[3],
        );
        let labels: Vec<&str> = SPECIALTY_CHIPS.iter().map(|(label, _)| *label).collect();
        // No chip selected highlights nothing
        let chip_line = choice_line(&labels, self.chip.unwrap_or(usize::MAX));
        frame.render_widget(Paragraph::new(chip_line), chunks[4]);

        let results = self.results(doctors);
        if results.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::styled("NO DOCTORS FOUND", Style::default().fg(t.dim)))
                    .alignment(Alignment::Center),
                chunks[6],
            );
            return;
        }

        let items: Vec<ListItem> = results.iter().map(|doctor| doctor_card(doctor)).collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!(" {} RESULTS ", results.len()))
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(t.dim)),
            )
            .highlight_style(Style::default().bg(t.highlight).fg(t.bg))
            .highlight_symbol("> ");

        self.list_state.select(Some(self.selected.min(results.len() - 1)));
        frame.render_stateful_widget(list, chunks[6], &mut self.list_state);
    }
}

fn doctor_card(doctor: &Doctor) -> ListItem<'static> {
    let t = theme();
    ListItem::new(vec![
        Line::from(Span::styled(
            doctor.name.clone(),
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        Line::from(doctor.specialty.clone()),
        Line::from(vec![
            Span::styled("AVAILABILITY: ", Style::default().fg(t.dim)),
            Span::raw(doctor.availability.clone()),
        ]),
        Line::from(""),
    ])
}

impl Default for SearchDoctorsView {
    fn default() -> Self {
        Self::new()
    }
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

    fn type_query(view: &mut SearchDoctorsView, doctors: &[Doctor], text: &str) {
        for c in text.chars() {
            view.handle_input(key(KeyCode::Char(c)), doctors);
        }
    }

    #[test]
    fn test_typed_query_filters() {
        let doctors = MockData::seed().doctors;
        let mut view = SearchDoctorsView::new();
        type_query(&mut view, &doctors, "cardio");

        let ids: Vec<u32> = view.results(&doctors).iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_book_selected_doctor() {
        let doctors = MockData::seed().doctors;
        let mut view = SearchDoctorsView::new();
        view.handle_input(key(KeyCode::Down), &doctors);

        match view.handle_input(key(KeyCode::Enter), &doctors) {
            Some(SearchAction::Book(doctor)) => assert_eq!(doctor.name, "Dr. Jones"),
            other => panic!("expected a booking, got {other:?}"),
        }
    }

    #[test]
    fn test_selection_is_clamped_to_results() {
        let doctors = MockData::seed().doctors;
        let mut view = SearchDoctorsView::new();
        for _ in 0..10 {
            view.handle_input(key(KeyCode::Down), &doctors);
        }
        assert_eq!(view.selected, 2);
        view.handle_input(key(KeyCode::Up), &doctors);
        assert_eq!(view.selected, 1);
    }

    #[test]
    fn test_typing_resets_selection() {
        let doctors = MockData::seed().doctors;
        let mut view = SearchDoctorsView::new();
        view.handle_input(key(KeyCode::Down), &doctors);
        type_query(&mut view, &doctors, "dr");
        assert_eq!(view.selected, 0);
    }

    #[test]
    fn test_enter_without_results_does_nothing() {
        let doctors = MockData::seed().doctors;
        let mut view = SearchDoctorsView::new();
        type_query(&mut view, &doctors, "dentist");
        assert!(view.results(&doctors).is_empty());
        assert_eq!(view.handle_input(key(KeyCode::Enter), &doctors), None);
    }

    #[test]
    fn test_tab_cycles_specialty_chips() {
        let doctors = MockData::seed().doctors;
        let mut view = SearchDoctorsView::new();

        view.handle_input(key(KeyCode::Tab), &doctors);
        assert_eq!(view.query(), "general");
        assert_eq!(view.results(&doctors)[0].name, "Dr. Smith");

        view.handle_input(key(KeyCode::Tab), &doctors);
        view.handle_input(key(KeyCode::Tab), &doctors);
        assert_eq!(view.query(), "cardiology");

        view.handle_input(key(KeyCode::Tab), &doctors);
        assert_eq!(view.query(), "");

        view.handle_input(key(KeyCode::BackTab), &doctors);
        assert_eq!(view.query(), "cardiology");
    }

    #[test]
    fn test_escape_goes_back() {
        let doctors = MockData::seed().doctors;
        let mut view = SearchDoctorsView::new();
        assert_eq!(view.handle_input(key(KeyCode::Esc), &doctors), Some(SearchAction::Back));
    }

    #[test]
    fn test_render_shows_cards() {
        let doctors = MockData::seed().doctors;
        let mut view = SearchDoctorsView::new();
        let text = render_text(50, 30, |f| view.render(f, f.area(), &doctors));
        assert!(text.contains("FIND A DOCTOR"));
        assert!(text.contains("Dr. Garcia"));
        assert!(text.contains("Mon/Wed/Fri 09:00 - 15:00"));
        assert!(text.contains("[ PEDIATRICS ]"));
    }

    #[test]
    fn test_render_empty_results() {
        let doctors = MockData::seed().doctors;
        let mut view = SearchDoctorsView::new();
        type_query(&mut view, &doctors, "zzz");
        let text = render_text(50, 20, |f| view.render(f, f.area(), &doctors));
        assert!(text.contains("NO DOCTORS FOUND"));
    }
}
