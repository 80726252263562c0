//! Theme and styling configuration.
//!
//! The active theme is process-global and read-only once set. Views call
//! [`theme()`] instead of threading colors through every render call.

use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};

static THEME: OnceLock<Theme> = OnceLock::new();

/// Color theme for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Primary background color.
    pub bg: Color,
    /// Titles, focused borders and key hints.
    pub accent: Color,
    /// Background of the focused control.
    pub highlight: Color,
    /// Confirmations and key names in the help overlay.
    pub success: Color,
    /// Section headings and warnings.
    pub warning: Color,
    /// Destructive actions (cancel).
    pub error: Color,
    /// Secondary text and unfocused borders.
    pub dim: Color,
}

impl Theme {
    /// Light text on a dark terminal.
    pub fn dark() -> Self {
        Self {
            fg: Color::White,
            bg: Color::Black,
            accent: Color::Cyan,
            highlight: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            dim: Color::DarkGray,
        }
    }

    /// Dark text on a light terminal.
    pub fn light() -> Self {
        Self {
            fg: Color::Black,
            bg: Color::White,
            accent: Color::Blue,
            highlight: Color::Blue,
            success: Color::Green,
            warning: Color::Magenta,
            error: Color::Red,
            dim: Color::Gray,
        }
    }

    /// Style for a focused button or list item.
    pub fn focused(&self) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a border, depending on focus.
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.dim)
        }
    }

    /// Style for a screen title.
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Look up a theme by its configuration name. Unknown names get the dark theme.
pub fn load_theme(name: &str) -> Theme {
    match name {
        "light" => Theme::light(),
        _ => Theme::dark(),
    }
}

/// Install the global theme. Only the first call has an effect.
pub fn init_theme(theme: Theme) {
    let _ = THEME.set(theme);
}

/// The global theme, defaulting to dark if none was installed.
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::dark)
}
