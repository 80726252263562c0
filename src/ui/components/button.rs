//! Button and back-link rendering helpers.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::theme;

/// Render a bordered, centered button.
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    let t = theme();
    let style = if focused {
        t.focused()
    } else {
        Style::default().fg(t.fg).add_modifier(Modifier::BOLD)
    };

    let button = Paragraph::new(label.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(t.border(focused)),
        );

    frame.render_widget(button, area);
}

/// A one-line inline control such as `< BACK` or a link.
pub fn link_line(label: &str, focused: bool) -> Line<'static> {
    let t = theme();
    let style = if focused {
        t.focused()
    } else {
        Style::default()
            .fg(t.accent)
            .add_modifier(Modifier::UNDERLINED)
    };
    Line::from(Span::styled(format!(" {} ", label), style))
}

/// A row of options where exactly one is selected, e.g. `[ 24 HRS ]`.
pub fn choice_line(labels: &[&str], selected: usize) -> Line<'static> {
    let t = theme();
    let mut spans = Vec::with_capacity(labels.len() * 2);
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if i == selected {
            t.focused()
        } else {
            Style::default().fg(t.fg)
        };
        spans.push(Span::styled(format!("[ {} ]", label), style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_line_text() {
        let line = link_line("< BACK", false);
        assert_eq!(line.spans[0].content, " < BACK ");
    }

    #[test]
    fn test_choice_line_highlights_selected() {
        let line = choice_line(&["1 HR", "24 HRS", "48 HRS"], 1);
        // Three options separated by two spaces
        assert_eq!(line.spans.len(), 5);
        assert_eq!(line.spans[2].content, "[ 24 HRS ]");
        assert_eq!(line.spans[2].style, theme().focused());
        assert_ne!(line.spans[0].style, theme().focused());
    }
}
