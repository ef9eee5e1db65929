//! Error types for apptbook.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::new_appointment::RequiredField;

/// Errors that can occur in apptbook operations.
///
/// Lookups by id are not errors: `update_status` and `delete` report a
/// missing appointment through `None` / `false`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppointmentError {
    #[error("Missing required fields: {}", join_fields(.missing))]
    Validation { missing: Vec<RequiredField> },

    #[error("{0}")]
    Conflict(Box<Conflict>),

    #[error("Invalid status '{0}'. Expected one of: Scheduled, Confirmed, Upcoming, Cancelled")]
    InvalidStatus(String),

    #[error("Invalid mode '{0}'. Expected one of: In-Person, Video Call, Phone Call")]
    InvalidMode(String),

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidTime(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for apptbook operations.
pub type AppointmentResult<T> = Result<T, AppointmentError>;

/// An existing appointment that blocks a new booking.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    pub doctor_name: String,
    pub date: NaiveDate,
    /// Id of the appointment already holding the slot
    pub existing_id: u64,
    pub existing_time: NaiveTime,
    pub existing_duration: u32,
    pub existing_patient: String,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Time conflict detected: {} already has an appointment on {} from {} for {} minutes (Patient: {})",
            self.doctor_name,
            self.date.format("%Y-%m-%d"),
            self.existing_time.format("%H:%M"),
            self.existing_duration,
            self.existing_patient
        )
    }
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
