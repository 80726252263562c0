//! Helpers for rendering into an in-memory terminal in tests.

use ratatui::{backend::TestBackend, Frame, Terminal};

/// Draw into a `width` x `height` test terminal and return the rows as text.
pub fn render_lines(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(draw).unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(usize::from(width))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

/// Draw into a test terminal and return everything as one string.
pub fn render_text(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> String {
    render_lines(width, height, draw).join("\n")
}
