//! Core of apptbook, a clinic appointment book.
//!
//! This crate holds everything with logic in it:
//! - `Appointment` and its status/mode enums
//! - `AppointmentStore`: list/create/update-status/delete with field
//!   validation and double-booking detection
//! - demo `seed` data, dashboard `stats` and `config`
//!
//! Presentation layers call into `AppointmentStore` in-process.

pub mod appointment;
pub mod config;
pub mod error;
pub mod filter;
pub mod new_appointment;
pub mod seed;
pub mod stats;
pub mod store;
pub mod time_slot;

pub use appointment::{Appointment, AppointmentMode, AppointmentStatus};
pub use error::{AppointmentError, AppointmentResult, Conflict};
pub use filter::AppointmentFilter;
pub use new_appointment::{NewAppointment, RequiredField};
pub use stats::ScheduleStats;
pub use store::AppointmentStore;
pub use time_slot::TimeSlot;
