//! Event handling for the application.
//!
//! Terminal input is polled and converted into [`Event`]s which drive
//! `App::update`. Key binding tables for the help overlay and hint bar also
//! live here.

mod handler;
mod keys;

use crossterm::event::KeyEvent;

pub use handler::EventHandler;
pub use keys::{get_context_hints, get_keybindings_grouped, KeyContext, Keybinding};

/// Application events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// The tick interval elapsed without input.
    Tick,
}
