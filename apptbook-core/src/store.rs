//! In-memory appointment storage.
//!
//! Owns the appointment collection and the id sequence. Every operation
//! runs to completion before returning; mutations take `&mut self`, so
//! callers are serialized by construction.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::appointment::{Appointment, AppointmentStatus};
use crate::error::{AppointmentError, AppointmentResult, Conflict};
use crate::filter::AppointmentFilter;
use crate::new_appointment::NewAppointment;
use crate::seed;
use crate::stats::ScheduleStats;
use crate::time_slot::TimeSlot;

#[derive(Debug, Clone)]
pub struct AppointmentStore {
    /// Insertion order, deleted entries removed
    appointments: Vec<Appointment>,
    /// Next id to hand out. Only ever increases.
    next_id: u64,
}

impl Default for AppointmentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AppointmentStore {
    /// An empty store whose first appointment gets id 1.
    pub fn new() -> Self {
        AppointmentStore {
            appointments: Vec::new(),
            next_id: 1,
        }
    }

    /// A store loaded with the demo fixture from [`seed::appointments`].
    pub fn seeded() -> Self {
        AppointmentStore {
            appointments: seed::appointments(),
            next_id: seed::NEXT_ID,
        }
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// Appointments matching every field set on `filter`, in collection order.
    pub fn list(&self, filter: &AppointmentFilter) -> Vec<&Appointment> {
        let matches: Vec<&Appointment> = self
            .appointments
            .iter()
            .filter(|a| filter.matches(a))
            .collect();

        debug!(?filter, count = matches.len(), "listed appointments");
        matches
    }

    /// Validate, check for double-booking, then store the new appointment.
    ///
    /// Nothing is stored (and no id consumed) unless both checks pass.
    pub fn create(&mut self, input: NewAppointment) -> AppointmentResult<Appointment> {
        let draft = input.validate().inspect_err(|e| {
            warn!(error = %e, "rejected appointment");
        })?;

        if let Some(conflict) = self.find_conflict(&draft.doctor_name, draft.date, draft.slot()) {
            warn!(
                doctor = %draft.doctor_name,
                date = %draft.date,
                existing_id = conflict.existing_id,
                "rejected double booking"
            );
            return Err(AppointmentError::Conflict(Box::new(conflict)));
        }

        let id = self.next_id;
        self.next_id += 1;

        let appointment = draft.into_appointment(id);
        info!(
            id,
            doctor = %appointment.doctor_name,
            date = %appointment.date,
            slot = %appointment.slot(),
            "created appointment"
        );

        self.appointments.push(appointment.clone());
        Ok(appointment)
    }

    /// First non-cancelled appointment for `doctor_name` on `date` whose
    /// slot overlaps `slot`.
    pub fn find_conflict(
        &self,
        doctor_name: &str,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Option<Conflict> {
        self.appointments
            .iter()
            .filter(|a| a.blocks_time() && a.doctor_name == doctor_name && a.date == date)
            .find(|a| slot.overlaps(&a.slot()))
            .map(|a| Conflict {
                doctor_name: doctor_name.to_string(),
                date,
                existing_id: a.id,
                existing_time: a.time,
                existing_duration: a.duration,
                existing_patient: a.patient_name.clone(),
            })
    }

    /// Overwrite the status of an appointment.
    ///
    /// Returns `None` without touching anything if the id is unknown.
    /// Any status may replace any other, including reviving a Cancelled
    /// appointment. Reviving does not re-run the double-booking check.
    pub fn update_status(&mut self, id: u64, status: AppointmentStatus) -> Option<Appointment> {
        let Some(appointment) = self.appointments.iter_mut().find(|a| a.id == id) else {
            debug!(id, "status update for unknown appointment");
            return None;
        };

        let previous = appointment.status;
        appointment.status = status;
        info!(id, %previous, %status, "updated appointment status");

        Some(appointment.clone())
    }

    /// Remove an appointment. Returns false if the id is unknown.
    pub fn delete(&mut self, id: u64) -> bool {
        match self.appointments.iter().position(|a| a.id == id) {
            Some(index) => {
                let removed = self.appointments.remove(index);
                info!(id, patient = %removed.patient_name, "deleted appointment");
                true
            }
            None => {
                debug!(id, "delete for unknown appointment");
                false
            }
        }
    }

    /// Distinct doctor names, sorted.
    pub fn doctors(&self) -> Vec<String> {
        let mut doctors: Vec<String> = self
            .appointments
            .iter()
            .map(|a| a.doctor_name.clone())
            .collect();
        doctors.sort();
        doctors.dedup();
        doctors
    }

    pub fn stats(&self, today: NaiveDate) -> ScheduleStats {
        ScheduleStats::compute(&self.appointments, today)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Appointment> {
        self.appointments.iter()
    }
}
