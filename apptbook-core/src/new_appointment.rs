//! Input for creating an appointment.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::appointment::{Appointment, AppointmentMode, AppointmentStatus, hhmm};
use crate::error::{AppointmentError, AppointmentResult};
use crate::time_slot::TimeSlot;

/// Fields that must be present (and non-empty) to create an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    PatientName,
    Date,
    Time,
    Duration,
    DoctorName,
    Mode,
}

impl RequiredField {
    /// Name as it appears in the create payload
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::PatientName => "patientName",
            RequiredField::Date => "date",
            RequiredField::Time => "time",
            RequiredField::Duration => "duration",
            RequiredField::DoctorName => "doctorName",
            RequiredField::Mode => "mode",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A create request as submitted by a form.
///
/// Required fields are optional here so a half-filled form can be
/// represented and rejected with the full list of what is missing.
/// An empty string or a zero duration counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub patient_name: Option<String>,
    pub date: Option<NaiveDate>,
    #[serde(default, with = "hhmm::option")]
    pub time: Option<NaiveTime>,
    pub duration: Option<u32>,
    pub doctor_name: Option<String>,
    pub mode: Option<AppointmentMode>,

    /// Defaults to Scheduled
    pub status: Option<AppointmentStatus>,
    pub reason: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
}

/// A request that passed field validation, waiting for an id.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Draft {
    pub patient_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration: u32,
    pub doctor_name: String,
    pub status: AppointmentStatus,
    pub mode: AppointmentMode,
    pub reason: String,
    pub phone: String,
    pub email: String,
    pub notes: String,
}

impl Draft {
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::from_start(self.time, self.duration)
    }

    pub fn into_appointment(self, id: u64) -> Appointment {
        Appointment {
            id,
            patient_name: self.patient_name,
            date: self.date,
            time: self.time,
            duration: self.duration,
            doctor_name: self.doctor_name,
            status: self.status,
            mode: self.mode,
            reason: self.reason,
            phone: self.phone,
            email: self.email,
            notes: self.notes,
        }
    }
}

impl NewAppointment {
    /// A request with every required field filled in.
    pub fn new(
        patient_name: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        duration: u32,
        doctor_name: impl Into<String>,
        mode: AppointmentMode,
    ) -> Self {
        NewAppointment {
            patient_name: Some(patient_name.into()),
            date: Some(date),
            time: Some(time),
            duration: Some(duration),
            doctor_name: Some(doctor_name.into()),
            mode: Some(mode),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: AppointmentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Required fields that are absent or empty, in payload order.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        let present = |s: &Option<String>| s.as_deref().is_some_and(|s| !s.is_empty());

        let checks = [
            (RequiredField::PatientName, present(&self.patient_name)),
            (RequiredField::Date, self.date.is_some()),
            (RequiredField::Time, self.time.is_some()),
            (RequiredField::Duration, self.duration.is_some_and(|d| d > 0)),
            (RequiredField::DoctorName, present(&self.doctor_name)),
            (RequiredField::Mode, self.mode.is_some()),
        ];

        checks
            .into_iter()
            .filter(|(_, ok)| !ok)
            .map(|(field, _)| field)
            .collect()
    }

    /// Check required fields and apply defaults.
    pub(crate) fn validate(self) -> AppointmentResult<Draft> {
        let missing = self.missing_fields();
        let non_empty = |s: Option<String>| s.filter(|s| !s.is_empty());

        let (Some(patient_name), Some(date), Some(time), Some(duration), Some(doctor_name), Some(mode)) = (
            non_empty(self.patient_name),
            self.date,
            self.time,
            self.duration.filter(|d| *d > 0),
            non_empty(self.doctor_name),
            self.mode,
        ) else {
            return Err(AppointmentError::Validation { missing });
        };

        Ok(Draft {
            patient_name,
            date,
            time,
            duration,
            doctor_name,
            status: self.status.unwrap_or_default(),
            mode,
            reason: self.reason.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            notes: self.notes.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_reports_every_field() {
        let missing = NewAppointment::default().missing_fields();
        assert_eq!(
            missing,
            vec![
                RequiredField::PatientName,
                RequiredField::Date,
                RequiredField::Time,
                RequiredField::Duration,
                RequiredField::DoctorName,
                RequiredField::Mode,
            ]
        );
    }

    #[test]
    fn test_empty_strings_and_zero_duration_count_as_missing() {
        let mut request = NewAppointment::new(
            "",
            NaiveDate::from_ymd_opt(2026, 2, 3).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            0,
            "Dr. Priya Sharma",
            AppointmentMode::InPerson,
        );
        request.doctor_name = Some(String::new());

        assert_eq!(
            request.validate(),
            Err(AppointmentError::Validation {
                missing: vec![
                    RequiredField::PatientName,
                    RequiredField::Duration,
                    RequiredField::DoctorName
                ]
            })
        );
    }

    #[test]
    fn test_defaults_applied() {
        let draft = NewAppointment::new(
            "Test P",
            NaiveDate::from_ymd_opt(2026, 2, 3).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            30,
            "Dr. Priya Sharma",
            AppointmentMode::PhoneCall,
        )
        .validate()
        .unwrap();

        assert_eq!(draft.status, AppointmentStatus::Scheduled);
        assert_eq!(draft.reason, "");
        assert_eq!(draft.phone, "");
        assert_eq!(draft.email, "");
        assert_eq!(draft.notes, "");
    }

    #[test]
    fn test_deserialize_form_payload() {
        let payload = r#"{
            "patientName": "Test P",
            "date": "2026-01-30",
            "time": "09:15",
            "duration": 30,
            "doctorName": "Dr. Rajesh Kumar",
            "mode": "In-Person",
            "notes": "walk-in"
        }"#;

        let request: NewAppointment = serde_json::from_str(payload).unwrap();
        assert!(request.missing_fields().is_empty());
        assert_eq!(request.time, Some(NaiveTime::from_hms_opt(9, 15, 0).unwrap()));
        assert_eq!(request.status, None);
        assert_eq!(request.notes.as_deref(), Some("walk-in"));
    }

    #[test]
    fn test_deserialize_partial_payload() {
        let request: NewAppointment =
            serde_json::from_str(r#"{"patientName": "Test P", "time": ""}"#).unwrap();
        assert_eq!(
            request.missing_fields(),
            vec![
                RequiredField::Date,
                RequiredField::Time,
                RequiredField::Duration,
                RequiredField::DoctorName,
                RequiredField::Mode,
            ]
        );
    }
}
