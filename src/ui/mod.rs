//! User interface components and views.
//!
//! This module contains all TUI rendering logic: one view per screen and the
//! small set of widgets they share.

mod components;
pub mod theme;
mod views;

#[cfg(test)]
pub(crate) mod test_utils;

pub use components::{render_footer, Toasts};
pub use theme::{init_theme, load_theme};
pub use views::{
    AppointmentsAction, AppointmentsView, DashboardAction, DashboardView, HelpAction, HelpView,
    HistoryAction, LoginAction, LoginView, MedicalHistoryView, RegisterAction, RegisterView,
    RemindersAction, RemindersView, ScheduleAction, ScheduleView, SearchAction,
    SearchDoctorsView,
};
