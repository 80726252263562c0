//! Domain data for MediCitas.
//!
//! This module holds the patient-facing record types, the hardcoded sample
//! data that stands in for a backend, and the doctor search filter.

mod mock;
mod search;
pub mod types;

pub use mock::MockData;
pub use search::filter_doctors;
pub use types::{next_appointment_id, Appointment, Doctor, Screen};
