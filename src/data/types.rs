//! Record types shared by the views and the navigation controller.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

/// A doctor that can be searched for and booked.
///
/// Doctors only exist as sample data and are never created or edited at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    /// Unique identifier.
    pub id: u32,
    /// Display name, e.g. "Dr. Smith".
    pub name: String,
    /// Medical specialty, e.g. "Cardiology".
    pub specialty: String,
    /// Free-text schedule description.
    pub availability: String,
}

impl Doctor {
    /// Create a new doctor record.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        specialty: impl Into<String>,
        availability: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            specialty: specialty.into(),
            availability: availability.into(),
        }
    }
}

/// Lifecycle status of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    /// Scheduled and not yet attended. Can be cancelled.
    Upcoming,
    /// Attended. Carries a diagnosis and notes.
    Completed,
}

impl AppointmentStatus {
    /// Get the display label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Upcoming => "UPCOMING",
            Self::Completed => "COMPLETED",
        }
    }
}

/// A patient appointment, either upcoming or part of the medical history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    /// Unique identifier.
    pub id: u32,
    /// Name of the attending doctor.
    pub doctor_name: String,
    /// Date as `YYYY-MM-DD`.
    pub date: String,
    /// Time as shown to the patient, e.g. "10:00 AM".
    pub time: String,
    /// Lifecycle status.
    pub status: AppointmentStatus,
    /// Diagnosis, only for completed appointments.
    pub diagnosis: Option<String>,
    /// Doctor's notes, only for completed appointments.
    pub notes: Option<String>,
}

impl Appointment {
    /// Create an upcoming appointment (no diagnosis or notes).
    pub fn upcoming(
        id: u32,
        doctor_name: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id,
            doctor_name: doctor_name.into(),
            date: date.into(),
            time: time.into(),
            status: AppointmentStatus::Upcoming,
            diagnosis: None,
            notes: None,
        }
    }

    /// Create a completed appointment with its diagnosis and notes.
    pub fn completed(
        id: u32,
        doctor_name: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        diagnosis: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id,
            doctor_name: doctor_name.into(),
            date: date.into(),
            time: time.into(),
            status: AppointmentStatus::Completed,
            diagnosis: Some(diagnosis.into()),
            notes: Some(notes.into()),
        }
    }

    /// Check if this appointment is still upcoming.
    pub fn is_upcoming(&self) -> bool {
        self.status == AppointmentStatus::Upcoming
    }
}

/// Pick the id for a newly booked appointment.
///
/// Ids are unique across every record passed in, so callers should chain the
/// live appointment list with the history.
pub fn next_appointment_id<'a>(records: impl IntoIterator<Item = &'a Appointment>) -> u32 {
    records
        .into_iter()
        .map(|a| a.id)
        .max()
        .map_or(1, |max| max + 1)
}

/// Error returned when a screen name does not match any screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown screen '{0}'")]
pub struct UnknownScreen(pub String);

/// The screens the application can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// Email/password entry. Initial screen.
    #[default]
    Login,
    /// New account form.
    Register,
    /// Home menu after login.
    Dashboard,
    /// Doctor list with the name/specialty filter.
    SearchDoctors,
    /// Date and time picker for the selected doctor.
    ScheduleAppointment,
    /// Upcoming appointments with cancellation.
    Appointments,
    /// Completed appointments with diagnosis and notes.
    MedicalHistory,
    /// Reminder preferences.
    Reminders,
}

impl Screen {
    /// Every screen, in menu order.
    pub const ALL: [Screen; 8] = [
        Screen::Login,
        Screen::Register,
        Screen::Dashboard,
        Screen::SearchDoctors,
        Screen::ScheduleAppointment,
        Screen::Appointments,
        Screen::MedicalHistory,
        Screen::Reminders,
    ];

    /// Stable identifier used in configuration and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login => "LOGIN",
            Self::Register => "REGISTER",
            Self::Dashboard => "DASHBOARD",
            Self::SearchDoctors => "SEARCH_DOCTORS",
            Self::ScheduleAppointment => "SCHEDULE_APPOINTMENT",
            Self::Appointments => "APPOINTMENTS",
            Self::MedicalHistory => "MEDICAL_HISTORY",
            Self::Reminders => "REMINDERS",
        }
    }

    /// Resolve a screen name, falling back to [`Screen::Login`].
    ///
    /// Unknown names are not an error for callers: the login screen is always
    /// a valid place to start, and the substitution is logged.
    pub fn parse_or_login(name: &str) -> Screen {
        name.parse().unwrap_or_else(|e: UnknownScreen| {
            warn!(error = %e, "Falling back to login screen");
            Screen::Login
        })
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Screen {
    type Err = UnknownScreen;

    /// Parse a screen name. Matching ignores case and treats `-` and spaces as `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();

        Screen::ALL
            .into_iter()
            .find(|screen| screen.name() == normalized)
            .ok_or_else(|| UnknownScreen(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upcoming_has_no_diagnosis() {
        let appt = Appointment::upcoming(1, "Dr. Smith", "2023-11-20", "10:00 AM");
        assert!(appt.is_upcoming());
        assert!(appt.diagnosis.is_none());
        assert!(appt.notes.is_none());
    }

    #[test]
    fn test_completed_has_diagnosis_and_notes() {
        let appt = Appointment::completed(
            2,
            "Dr. Garcia",
            "2023-10-05",
            "02:30 PM",
            "Common Cold",
            "Rest and hydration recommended.",
        );
        assert!(!appt.is_upcoming());
        assert_eq!(appt.status.label(), "COMPLETED");
        assert_eq!(appt.diagnosis.as_deref(), Some("Common Cold"));
        assert_eq!(appt.notes.as_deref(), Some("Rest and hydration recommended."));
    }

    #[test]
    fn test_next_appointment_id_empty() {
        assert_eq!(next_appointment_id(&Vec::<Appointment>::new()), 1);
    }

    #[test]
    fn test_next_appointment_id_uses_max() {
        let records = vec![
            Appointment::upcoming(1, "Dr. Smith", "2023-11-20", "10:00 AM"),
            Appointment::upcoming(7, "Dr. Jones", "2023-11-21", "09:00 AM"),
            Appointment::upcoming(3, "Dr. Garcia", "2023-11-22", "11:00 AM"),
        ];
        assert_eq!(next_appointment_id(&records), 8);
    }

    #[test]
    fn test_screen_name_round_trip() {
        for screen in Screen::ALL {
            assert_eq!(screen.name().parse::<Screen>(), Ok(screen));
        }
    }

    #[test]
    fn test_screen_parse_is_lenient() {
        assert_eq!("search-doctors".parse::<Screen>(), Ok(Screen::SearchDoctors));
        assert_eq!(" medical history ".parse::<Screen>(), Ok(Screen::MedicalHistory));
        assert_eq!("dashboard".parse::<Screen>(), Ok(Screen::Dashboard));
    }

    #[test]
    fn test_screen_parse_unknown() {
        let err = "settings".parse::<Screen>().unwrap_err();
        assert_eq!(err, UnknownScreen("settings".to_string()));
        assert!(err.to_string().contains("settings"));
    }

    #[test]
    fn test_parse_or_login_fallback() {
        assert_eq!(Screen::parse_or_login("nowhere"), Screen::Login);
        assert_eq!(Screen::parse_or_login("REMINDERS"), Screen::Reminders);
    }

    #[test]
    fn test_screen_default_is_login() {
        assert_eq!(Screen::default(), Screen::Login);
    }

    #[test]
    fn test_screen_display() {
        assert_eq!(Screen::ScheduleAppointment.to_string(), "SCHEDULE_APPOINTMENT");
    }
}
