//! Toast messages for user feedback.
//!
//! Short-lived messages such as "Appointment cancelled" are stacked in the
//! bottom-right corner and expire on their own.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::theme;

/// The kind of toast, which determines its icon, color and lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational message.
    Info,
    /// Completed action.
    Success,
    /// Something was substituted or skipped.
    Warning,
    /// Something failed.
    Error,
}

impl ToastKind {
    /// Get the icon for this kind.
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Info => "i",
            ToastKind::Success => "✓",
            ToastKind::Warning => "!",
            ToastKind::Error => "✗",
        }
    }

    /// Get the style for this kind.
    pub fn style(&self) -> Style {
        let t = theme();
        let color = match self {
            ToastKind::Info => t.accent,
            ToastKind::Success => t.success,
            ToastKind::Warning => t.warning,
            ToastKind::Error => t.error,
        };
        Style::default().fg(color)
    }

    /// How long a toast of this kind stays visible.
    pub fn default_duration(&self) -> Duration {
        match self {
            ToastKind::Info | ToastKind::Success => Duration::from_secs(3),
            ToastKind::Warning | ToastKind::Error => Duration::from_secs(5),
        }
    }
}

/// A single toast message.
#[derive(Debug, Clone)]
pub struct Toast {
    /// The message text.
    pub message: String,
    /// The kind of toast.
    pub kind: ToastKind,
    /// When the toast was created.
    pub created_at: Instant,
    /// How long the toast is displayed.
    pub duration: Duration,
}

impl Toast {
    /// Create a toast with the default duration for its kind.
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            duration: kind.default_duration(),
        }
    }

    /// Check if the toast has expired.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

/// A bounded stack of toasts.
#[derive(Debug)]
pub struct Toasts {
    queue: VecDeque<Toast>,
    max_visible: usize,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Toasts {
    /// Create an empty stack showing at most three toasts.
    pub fn new() -> Self {
        Self::with_max_visible(3)
    }

    /// Create an empty stack with a custom limit.
    pub fn with_max_visible(max_visible: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            max_visible,
        }
    }

    /// Add a toast, dropping the oldest ones beyond the limit.
    pub fn push(&mut self, toast: Toast) {
        self.queue.push_back(toast);
        while self.queue.len() > self.max_visible {
            self.queue.pop_front();
        }
    }

    /// Add an info toast.
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastKind::Info));
    }

    /// Add a success toast.
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastKind::Success));
    }

    /// Add a warning toast.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastKind::Warning));
    }

    /// Add an error toast.
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastKind::Error));
    }

    /// Drop expired toasts. Called on every tick.
    pub fn tick(&mut self) {
        self.queue.retain(|toast| !toast.is_expired());
    }

    /// Check if there are no toasts.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of toasts.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Iterate over the toasts, oldest first.
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter()
    }

    /// Render the toasts in the bottom-right corner of `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if self.is_empty() {
            return;
        }

        let width = 40.min(area.width.saturating_sub(2));
        // Borders plus the icon prefix
        let inner_width = width.saturating_sub(4).max(1) as usize;

        let heights: Vec<u16> = self
            .queue
            .iter()
            .map(|toast| {
                let text_len = toast.message.chars().count() + 2;
                ((text_len + inner_width - 1) / inner_width) as u16 + 2
            })
            .collect();

        let total_height = heights.iter().sum::<u16>().min(area.height);
        let x = area.x + area.width.saturating_sub(width + 1);
        let y = area.y + area.height.saturating_sub(total_height);
        let stack_area = Rect::new(x, y, width, total_height);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(heights.iter().map(|&h| Constraint::Length(h)))
            .split(stack_area);

        for (toast, chunk) in self.queue.iter().zip(chunks.iter()) {
            render_toast(toast, frame, *chunk);
        }
    }
}

fn render_toast(toast: &Toast, frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);

    let style = toast.kind.style();
    let text = Line::from(vec![
        Span::styled(format!("{} ", toast.kind.icon()), style.add_modifier(Modifier::BOLD)),
        Span::styled(toast.message.clone(), style),
    ]);

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(style));

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_durations() {
        assert_eq!(Toast::new("x", ToastKind::Success).duration, Duration::from_secs(3));
        assert_eq!(Toast::new("x", ToastKind::Error).duration, Duration::from_secs(5));
    }

    #[test]
    fn test_not_expired_when_fresh() {
        assert!(!Toast::new("x", ToastKind::Info).is_expired());
    }

    #[test]
    fn test_push_respects_limit() {
        let mut toasts = Toasts::with_max_visible(2);
        toasts.info("1");
        toasts.success("2");
        toasts.warning("3");
        let messages: Vec<&str> = toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["2", "3"]);
    }

    #[test]
    fn test_tick_drops_expired() {
        let mut toasts = Toasts::new();
        let mut short = Toast::new("gone", ToastKind::Info);
        short.duration = Duration::from_millis(1);
        toasts.push(short);
        toasts.error("stays");
        std::thread::sleep(Duration::from_millis(5));
        toasts.tick();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.iter().next().map(|t| t.kind), Some(ToastKind::Error));
    }
}
