//! Key binding overlay.
//!
//! Opened with `?` outside text fields. The bindings for the screen it was
//! opened from come first, then the global ones, then everything else.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::events::{get_keybindings_grouped, KeyContext, Keybinding};
use crate::ui::theme::theme;

/// Actions that can be returned from the help overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpAction {
    /// Hide the overlay.
    Close,
}

/// Scrollable key binding reference.
#[derive(Debug, Clone)]
pub struct HelpView {
    sections: Vec<(KeyContext, Vec<Keybinding>)>,
    scroll: usize,
    visible_height: usize,
}

impl HelpView {
    pub fn new() -> Self {
        Self {
            sections: get_keybindings_grouped(),
            scroll: 0,
            visible_height: 0,
        }
    }

    /// Reorder the sections for `context` and scroll to the top.
    pub fn open(&mut self, context: KeyContext) {
        let rank = |c: &KeyContext| {
            if *c == context {
                0
            } else if *c == KeyContext::Global {
                1
            } else {
                2
            }
        };
        // Stable sort keeps the remaining sections in their usual order
        self.sections.sort_by_key(|(c, _)| rank(c));
        self.scroll = 0;
    }

    /// Heading, bindings and a blank line per section.
    fn total_lines(&self) -> usize {
        self.sections
            .iter()
            .map(|(_, bindings)| bindings.len() + 2)
            .sum()
    }

    fn max_scroll(&self) -> usize {
        self.total_lines().saturating_sub(self.visible_height)
    }

    /// Handle keyboard input. Every key is consumed while the overlay is open.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<HelpAction> {
        match key.code {
            KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc => Some(HelpAction::Close),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll = (self.scroll + 1).min(self.max_scroll());
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                let page = self.visible_height.saturating_sub(2).max(1);
                self.scroll = (self.scroll + page).min(self.max_scroll());
                None
            }
            KeyCode::PageUp => {
                let page = self.visible_height.saturating_sub(2).max(1);
                self.scroll = self.scroll.saturating_sub(page);
                None
            }
            _ => None,
        }
    }

    /// Render as a centered popup over `area`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let popup = centered(area, 56, 80);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" KEYS ")
            .title_alignment(Alignment::Center)
            .title_bottom(Line::styled(" ? / Esc to close ", Style::default().fg(t.dim)))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(t.accent));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        self.visible_height = inner.height as usize;
        self.scroll = self.scroll.min(self.max_scroll());

        frame.render_widget(
            Paragraph::new(self.lines()).scroll((self.scroll as u16, 0)),
            inner,
        );

        if self.total_lines() > self.visible_height {
            let mut state = ScrollbarState::new(self.max_scroll()).position(self.scroll);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                inner,
                &mut state,
            );
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let t = theme();
        let key_width = self
            .sections
            .iter()
            .flat_map(|(_, bindings)| bindings.iter())
            .map(|b| b.key.chars().count())
            .max()
            .unwrap_or(0);

        let mut lines = Vec::with_capacity(self.total_lines());
        for (context, bindings) in &self.sections {
            lines.push(Line::styled(
                context.display().to_uppercase(),
                Style::default().fg(t.warning).add_modifier(Modifier::BOLD),
            ));
            for binding in bindings {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!(" {:>width$}", binding.key, width = key_width),
                        Style::default().fg(t.success).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::raw(binding.description.clone()),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines
    }
}

impl Default for HelpView {
    fn default() -> Self {
        Self::new()
    }
}

/// A rectangle of at most `width` columns and `percent_y` percent of the
/// height, centered in `area`.
fn centered(area: Rect, width: u16, percent_y: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Max(width)])
        .flex(Flex::Center)
        .areas(row);
    popup
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
    fn test_close_keys() {
        let mut view = HelpView::new();
        for code in [KeyCode::Char('?'), KeyCode::Char('q'), KeyCode::Esc] {
            assert_eq!(view.handle_input(key(code)), Some(HelpAction::Close));
        }
        assert_eq!(view.handle_input(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_open_puts_current_screen_first() {
        let mut view = HelpView::new();
        view.open(KeyContext::Appointments);
        assert_eq!(view.sections[0].0, KeyContext::Appointments);
        assert_eq!(view.sections[1].0, KeyContext::Global);

        view.open(KeyContext::Login);
        assert_eq!(view.sections[0].0, KeyContext::Login);
        assert_eq!(view.sections[1].0, KeyContext::Global);
        assert_eq!(view.sections.len(), KeyContext::ALL.len());
    }

    #[test]
    fn test_scroll_bounds() {
        let mut view = HelpView::new();
        view.visible_height = 10;
        for _ in 0..500 {
            view.handle_input(key(KeyCode::Char('j')));
        }
        assert_eq!(view.scroll, view.max_scroll());
        view.handle_input(key(KeyCode::PageUp));
        assert_eq!(view.scroll, view.max_scroll() - 8);
        for _ in 0..500 {
            view.handle_input(key(KeyCode::Up));
        }
        assert_eq!(view.scroll, 0);
    }

    #[test]
    fn test_open_resets_scroll() {
        let mut view = HelpView::new();
        view.visible_height = 5;
        view.handle_input(key(KeyCode::PageDown));
        assert!(view.scroll > 0);
        view.open(KeyContext::Dashboard);
        assert_eq!(view.scroll, 0);
    }

    #[test]
    fn test_render_popup() {
        let mut view = HelpView::new();
        view.open(KeyContext::Schedule);
        let text = render_text(80, 30, |f| view.render(f, f.area()));
        assert!(text.contains("KEYS"));
        assert!(text.contains("SCHEDULE APPOINTMENT"));
        assert!(text.contains("Confirm appointment"));
    }
}
