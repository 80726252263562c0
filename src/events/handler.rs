//! Terminal event polling.
//!
//! Polls crossterm for terminal events and converts them to application events.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};

use super::Event;

/// The default tick rate for the event loop in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 100;

/// Produces application events by polling crossterm.
pub struct EventHandler {
    /// How long to wait for input before emitting a tick.
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the default tick rate.
    pub fn new() -> Self {
        Self::with_tick_rate(DEFAULT_TICK_RATE_MS)
    }

    /// Create a new event handler with a custom tick rate.
    ///
    /// A zero tick rate is raised to one millisecond so polling never spins.
    pub fn with_tick_rate(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms.max(1)),
        }
    }

    /// The configured tick rate.
    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Wait for the next event.
    ///
    /// Blocks until input arrives or the tick rate elapses, in which case
    /// `Event::Tick` is returned.
    pub fn next(&self) -> std::io::Result<Event> {
        if event::poll(self.tick_rate)? {
            Ok(convert(event::read()?))
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a crossterm event to an application event.
///
/// Only key presses are forwarded: some platforms also report releases and
/// repeats, which would trigger every action twice.
fn convert(event: CrosstermEvent) -> Event {
    match event {
        CrosstermEvent::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            Event::Key(key_event)
        }
        CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
        // Releases, mouse, focus and paste events are not handled
        _ => Event::Tick,
    }
}
