//! Footer bar with the current screen and its key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::data::Screen;
use crate::events::{get_context_hints, KeyContext};
use crate::ui::theme::theme;

/// Render the footer: a badge with the screen name followed by key hints.
pub fn render_footer(frame: &mut Frame, area: Rect, screen: Screen, context: KeyContext) {
    let t = theme();
    let mut spans = vec![
        Span::styled(
            format!(" {} ", screen.name()),
            Style::default()
                .fg(t.bg)
                .bg(t.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];
    spans.extend(parse_hints_to_spans(get_context_hints(context)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Split hint text into styled spans, highlighting the bracketed keys.
fn parse_hints_to_spans(hints: &str) -> Vec<Span<'static>> {
    let t = theme();
    let key_style = Style::default().fg(t.accent);
    let text_style = Style::default().fg(t.dim);

    let mut spans = Vec::new();
    let mut current = String::new();

    for c in hints.chars() {
        match c {
            '[' => {
                if !current.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut current), text_style));
                }
                current.push(c);
            }
            ']' if current.starts_with('[') => {
                current.push(c);
                spans.push(Span::styled(std::mem::take(&mut current), key_style));
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        spans.push(Span::styled(current, text_style));
    }

    spans
}
