//! Key binding tables.
//!
//! These tables only describe the bindings for display; the views implement
//! the bindings themselves in their `handle_input` methods.

use crate::data::Screen;

/// The context a key binding applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyContext {
    /// Available on every screen.
    Global,
    /// Login form.
    Login,
    /// Registration form.
    Register,
    /// Dashboard menu.
    Dashboard,
    /// Doctor search.
    SearchDoctors,
    /// Appointment scheduling.
    Schedule,
    /// Upcoming appointment list.
    Appointments,
    /// Medical history.
    History,
    /// Reminder settings.
    Reminders,
    /// Help overlay.
    Help,
}

impl KeyContext {
    /// Contexts in the order the help overlay lists them.
    pub const ALL: [KeyContext; 10] = [
        KeyContext::Global,
        KeyContext::Login,
        KeyContext::Register,
        KeyContext::Dashboard,
        KeyContext::SearchDoctors,
        KeyContext::Schedule,
        KeyContext::Appointments,
        KeyContext::History,
        KeyContext::Reminders,
        KeyContext::Help,
    ];

    /// The context for a screen.
    pub fn for_screen(screen: Screen) -> Self {
        match screen {
            Screen::Login => Self::Login,
            Screen::Register => Self::Register,
            Screen::Dashboard => Self::Dashboard,
            Screen::SearchDoctors => Self::SearchDoctors,
            Screen::ScheduleAppointment => Self::Schedule,
            Screen::Appointments => Self::Appointments,
            Screen::MedicalHistory => Self::History,
            Screen::Reminders => Self::Reminders,
        }
    }

    /// Section heading for the help overlay.
    pub fn display(&self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::Login => "Log In",
            Self::Register => "Registration",
            Self::Dashboard => "Dashboard",
            Self::SearchDoctors => "Find a Doctor",
            Self::Schedule => "Schedule Appointment",
            Self::Appointments => "Appointments",
            Self::History => "Medical History",
            Self::Reminders => "Reminder Settings",
            Self::Help => "Help",
        }
    }
}

/// A single documented key binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    /// Key or key combination as displayed, e.g. "Ctrl+C".
    pub key: String,
    /// What the key does.
    pub description: String,
    /// Where the key applies.
    pub context: KeyContext,
}

impl Keybinding {
    fn new(key: &str, description: &str, context: KeyContext) -> Self {
        Self {
            key: key.to_string(),
            description: description.to_string(),
            context,
        }
    }
}

/// Every documented key binding.
pub fn get_keybindings() -> Vec<Keybinding> {
    use KeyContext::*;

    vec![
        Keybinding::new("Ctrl+C", "Quit application", Global),
        Keybinding::new("?", "Toggle this help (outside text fields)", Global),
        Keybinding::new("q", "Quit from login or dashboard", Global),
        Keybinding::new("Tab / ↓", "Next field", Login),
        Keybinding::new("Shift+Tab / ↑", "Previous field", Login),
        Keybinding::new("Enter", "Log in or open registration", Login),
        Keybinding::new("Tab / ↓", "Next field", Register),
        Keybinding::new("Shift+Tab / ↑", "Previous field", Register),
        Keybinding::new("Enter", "Register or go back", Register),
        Keybinding::new("Esc", "Back to login", Register),
        Keybinding::new("j / ↓", "Next menu item", Dashboard),
        Keybinding::new("k / ↑", "Previous menu item", Dashboard),
        Keybinding::new("Enter", "Open selected item", Dashboard),
        Keybinding::new("type", "Filter by name or specialty", SearchDoctors),
        Keybinding::new("Tab", "Cycle specialty filter", SearchDoctors),
        Keybinding::new("↓ / ↑", "Select doctor", SearchDoctors),
        Keybinding::new("Enter", "Book selected doctor", SearchDoctors),
        Keybinding::new("Esc", "Back to dashboard", SearchDoctors),
        Keybinding::new("← / →", "Previous / next day", Schedule),
        Keybinding::new("↑ / ↓", "Previous / next week", Schedule),
        Keybinding::new("Tab / Shift+Tab", "Next / previous time slot", Schedule),
        Keybinding::new("Enter", "Confirm appointment", Schedule),
        Keybinding::new("Esc", "Back to doctor search", Schedule),
        Keybinding::new("j / ↓", "Next appointment", Appointments),
        Keybinding::new("k / ↑", "Previous appointment", Appointments),
        Keybinding::new("c / Del", "Cancel selected appointment", Appointments),
        Keybinding::new("Esc", "Back to dashboard", Appointments),
        Keybinding::new("j / ↓", "Scroll down", History),
        Keybinding::new("k / ↑", "Scroll up", History),
        Keybinding::new("Esc", "Back to dashboard", History),
        Keybinding::new("Space", "Toggle notifications", Reminders),
        Keybinding::new("← / →", "Change reminder time", Reminders),
        Keybinding::new("Esc", "Back to dashboard", Reminders),
        Keybinding::new("j / k", "Scroll", Help),
        Keybinding::new("? / q / Esc", "Close help", Help),
    ]
}

/// Key bindings grouped by context, in [`KeyContext::ALL`] order.
pub fn get_keybindings_grouped() -> Vec<(KeyContext, Vec<Keybinding>)> {
    let bindings = get_keybindings();
    KeyContext::ALL
        .into_iter()
        .map(|context| {
            let group: Vec<Keybinding> = bindings
                .iter()
                .filter(|b| b.context == context)
                .cloned()
                .collect();
            (context, group)
        })
        .filter(|(_, group)| !group.is_empty())
        .collect()
}

/// One-line hint text for the footer bar. Keys are in brackets.
pub fn get_context_hints(context: KeyContext) -> &'static str {
    match context {
        KeyContext::Global => "[Ctrl+C] quit  [?] help",
        KeyContext::Login => "[Tab] next field  [Enter] select  [q] quit  [?] help",
        KeyContext::Register => "[Tab] next field  [Enter] select  [Esc] back",
        KeyContext::Dashboard => "[j/k] move  [Enter] open  [q] quit  [?] help",
        KeyContext::SearchDoctors => "[type] filter  [Tab] specialty  [↑/↓] select  [Enter] book  [Esc] back",
        KeyContext::Schedule => "[←/→] day  [↑/↓] week  [Tab] time  [Enter] confirm  [Esc] back",
        KeyContext::Appointments => "[j/k] move  [c] cancel  [Esc] back  [?] help",
        KeyContext::History => "[j/k] scroll  [Esc] back  [?] help",
        KeyContext::Reminders => "[Space] toggle  [←/→] reminder time  [Esc] back",
        KeyContext::Help => "[j/k] scroll  [Esc] close",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_screen_has_a_context() {
        for screen in Screen::ALL {
            let context = KeyContext::for_screen(screen);
            assert_ne!(context, KeyContext::Global);
            assert_ne!(context, KeyContext::Help);
        }
    }

    #[test]
    fn test_every_context_has_bindings() {
        let grouped = get_keybindings_grouped();
        assert_eq!(grouped.len(), KeyContext::ALL.len());
    }

    #[test]
    fn test_grouping_preserves_order() {
        let grouped = get_keybindings_grouped();
        let contexts: Vec<KeyContext> = grouped.iter().map(|(c, _)| *c).collect();
        assert_eq!(contexts, KeyContext::ALL.to_vec());
    }

    #[test]
    fn test_grouped_bindings_match_context() {
        for (context, bindings) in get_keybindings_grouped() {
            assert!(bindings.iter().all(|b| b.context == context));
        }
    }

    #[test]
    fn test_hints_have_bracketed_keys() {
        for context in KeyContext::ALL {
            let hints = get_context_hints(context);
            assert!(hints.contains('[') && hints.contains(']'));
        }
    }
}
