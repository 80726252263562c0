//! Hardcoded sample data standing in for a real backend.
//!
//! Everything here is fictional and re-seeded on every fresh start and on
//! logout. Nothing is ever written back.

use super::types::{Appointment, Doctor};

/// The full set of sample records the application starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockData {
    /// Doctors available for booking.
    pub doctors: Vec<Doctor>,
    /// Upcoming appointments.
    pub appointments: Vec<Appointment>,
    /// Completed appointments shown in the medical history.
    pub history: Vec<Appointment>,
}

impl MockData {
    /// Build a fresh copy of the sample data.
    pub fn seed() -> Self {
        Self {
            doctors: doctors(),
            appointments: appointments(),
            history: history(),
        }
    }
}

impl Default for MockData {
    fn default() -> Self {
        Self::seed()
    }
}

fn doctors() -> Vec<Doctor> {
    vec![
        Doctor::new(1, "Dr. Smith", "General Medicine", "Mon-Fri 08:00 - 12:00"),
        Doctor::new(2, "Dr. Jones", "Pediatrics", "Tue-Thu 14:00 - 18:00"),
        Doctor::new(3, "Dr. Garcia", "Cardiology", "Mon/Wed/Fri 09:00 - 15:00"),
    ]
}

fn appointments() -> Vec<Appointment> {
    vec![Appointment::upcoming(1, "Dr. Smith", "2023-11-20", "10:00 AM")]
}

fn history() -> Vec<Appointment> {
    vec![
        Appointment::completed(
            2,
            "Dr. Garcia",
            "2023-10-05",
            "02:30 PM",
            "Common Cold",
            "Rest and hydration recommended.",
        ),
        Appointment::completed(
            3,
            "Dr. Jones",
            "2023-09-12",
            "09:00 AM",
            "Annual Checkup",
            "Patient is in good health.",
        ),
    ]
}
