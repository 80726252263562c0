//! Application settings configuration.

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};

/// How long before an appointment a reminder would be sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReminderLead {
    /// One hour before.
    #[serde(rename = "1h")]
    OneHour,
    /// One day before.
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHours,
    /// Two days before.
    #[serde(rename = "48h")]
    FortyEightHours,
}

impl ReminderLead {
    /// Every option, in display order.
    pub const ALL: [ReminderLead; 3] = [
        ReminderLead::OneHour,
        ReminderLead::TwentyFourHours,
        ReminderLead::FortyEightHours,
    ];

    /// Label shown on the option button.
    pub fn label(&self) -> &'static str {
        match self {
            Self::OneHour => "1 HR",
            Self::TwentyFourHours => "24 HRS",
            Self::FortyEightHours => "48 HRS",
        }
    }

    /// Relative phrase used in the example reminder text.
    pub fn phrase(&self) -> &'static str {
        match self {
            Self::OneHour => "in one hour",
            Self::TwentyFourHours => "tomorrow",
            Self::FortyEightHours => "in two days",
        }
    }

    /// The next option, stopping at the last one.
    pub fn next(&self) -> Self {
        match self {
            Self::OneHour => Self::TwentyFourHours,
            Self::TwentyFourHours | Self::FortyEightHours => Self::FortyEightHours,
        }
    }

    /// The previous option, stopping at the first one.
    pub fn prev(&self) -> Self {
        match self {
            Self::OneHour | Self::TwentyFourHours => Self::OneHour,
            Self::FortyEightHours => Self::TwentyFourHours,
        }
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Name shown in the dashboard greeting.
    pub patient_name: Option<String>,
    /// Screen to open on startup. Unknown names fall back to the login screen.
    pub start_screen: String,
    /// Event loop tick rate in milliseconds.
    pub tick_rate_ms: u64,
    /// Initial state of the notification toggle on the reminders screen.
    pub notifications_enabled: bool,
    /// Initial reminder lead time.
    pub reminder_lead: ReminderLead,
    /// The UI theme to use ("dark" or "light").
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            patient_name: None,
            start_screen: "LOGIN".to_string(),
            tick_rate_ms: 100,
            notifications_enabled: true,
            reminder_lead: ReminderLead::default(),
            theme: "dark".to_string(),
        }
    }
}

impl Settings {
    /// Validate these settings.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` for a zero tick rate or an
    /// unknown theme name.
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError(
                "tick_rate_ms must be greater than zero".to_string(),
            ));
        }

        if !matches!(self.theme.as_str(), "dark" | "light") {
            return Err(ConfigError::ValidationError(format!(
                "unknown theme '{}', expected 'dark' or 'light'",
                self.theme
            )));
        }

        Ok(())
    }

    /// Name for the dashboard greeting.
    pub fn greeting_name(&self) -> &str {
        self.patient_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("[PATIENT NAME]")
    }
}
