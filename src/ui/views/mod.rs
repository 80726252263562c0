//! One view per screen, plus the help overlay.
//!
//! Views hold only transient input state. They never touch the application
//! state directly; instead `handle_input` returns an action for the app to apply.

mod appointments;
mod dashboard;
mod help;
mod history;
mod login;
mod register;
mod reminders;
mod schedule;
mod search_doctors;

pub use appointments::{AppointmentsAction, AppointmentsView};
pub use dashboard::{DashboardAction, DashboardView};
pub use help::{HelpAction, HelpView};
pub use history::{HistoryAction, MedicalHistoryView};
pub use login::{LoginAction, LoginView};
pub use register::{RegisterAction, RegisterView};
pub use reminders::{RemindersAction, RemindersView};
pub use schedule::{ScheduleAction, ScheduleView};
pub use search_doctors::{SearchAction, SearchDoctorsView};
