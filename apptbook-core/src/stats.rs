//! Dashboard counters over the appointment collection.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::appointment::{Appointment, AppointmentMode, AppointmentStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleStats {
    /// Distinct patient names
    pub total_patients: usize,
    pub appointments_today: usize,
    pub confirmed_today: usize,
    /// Appointments dated after today, any status
    pub upcoming_count: usize,
    pub video_calls_today: usize,
    pub total_doctors: usize,
}

impl ScheduleStats {
    pub fn compute<'a>(
        appointments: impl IntoIterator<Item = &'a Appointment>,
        today: NaiveDate,
    ) -> Self {
        let mut patients = HashSet::new();
        let mut doctors = HashSet::new();
        let mut stats = ScheduleStats::default();

        for appointment in appointments {
            patients.insert(appointment.patient_name.as_str());
            doctors.insert(appointment.doctor_name.as_str());

            if appointment.date > today {
                stats.upcoming_count += 1;
            }

            if appointment.date == today {
                stats.appointments_today += 1;
                if appointment.status == AppointmentStatus::Confirmed {
                    stats.confirmed_today += 1;
                }
                if appointment.mode == AppointmentMode::VideoCall {
                    stats.video_calls_today += 1;
                }
            }
        }

        stats.total_patients = patients.len();
        stats.total_doctors = doctors.len();
        stats
    }
}
