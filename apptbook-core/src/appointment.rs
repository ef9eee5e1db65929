//! The appointment record and its enumerated fields.
//!
//! Field names serialize in camelCase and enum values use their display
//! labels ("Video Call", "In-Person"), so a JSON consumer sees the same
//! shape the scheduling UI works with.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::AppointmentError;
use crate::time_slot::TimeSlot;

/// A scheduled patient/doctor encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: u64,
    pub patient_name: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    /// Length in minutes, always > 0
    pub duration: u32,
    pub doctor_name: String,
    pub status: AppointmentStatus,
    pub mode: AppointmentMode,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub notes: String,
}

impl Appointment {
    /// The half-open minute range this appointment occupies on its date.
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::from_start(self.time, self.duration)
    }

    /// Whether this appointment takes part in double-booking checks.
    pub fn blocks_time(&self) -> bool {
        self.status != AppointmentStatus::Cancelled
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} with {} on {} {}",
            self.id,
            self.patient_name,
            self.doctor_name,
            self.date.format("%Y-%m-%d"),
            self.slot()
        )
    }
}

/// Appointment status. Any status may move to any other; none is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Confirmed,
    Upcoming,
    Cancelled,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Upcoming,
        AppointmentStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Upcoming => "Upcoming",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = AppointmentError;

    /// Exact, case-sensitive match on the status label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| AppointmentError::InvalidStatus(s.to_string()))
    }
}

/// How the consultation takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentMode {
    #[serde(rename = "In-Person")]
    InPerson,
    #[serde(rename = "Video Call")]
    VideoCall,
    #[serde(rename = "Phone Call")]
    PhoneCall,
}

impl AppointmentMode {
    pub const ALL: [AppointmentMode; 3] = [
        AppointmentMode::InPerson,
        AppointmentMode::VideoCall,
        AppointmentMode::PhoneCall,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentMode::InPerson => "In-Person",
            AppointmentMode::VideoCall => "Video Call",
            AppointmentMode::PhoneCall => "Phone Call",
        }
    }
}

impl fmt::Display for AppointmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentMode {
    type Err = AppointmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| AppointmentError::InvalidMode(s.to_string()))
    }
}

/// Parse a time of day written as HH:MM.
pub fn parse_time(s: &str) -> Result<NaiveTime, AppointmentError> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| AppointmentError::InvalidTime(s.to_string()))
}

/// Parse a calendar date written as YYYY-MM-DD.
pub fn parse_date(s: &str) -> Result<NaiveDate, AppointmentError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppointmentError::InvalidDate(s.to_string()))
}

/// Serde adapter for times stored as "HH:MM".
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_time(&s).map_err(serde::de::Error::custom)
    }

    /// Same format for optional fields; absent or empty strings become `None`.
    pub mod option {
        use chrono::NaiveTime;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            time: &Option<NaiveTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match time {
                Some(t) => super::serialize(t, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveTime>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(s) if !s.is_empty() => crate::appointment::parse_time(&s)
                    .map(Some)
                    .map_err(serde::de::Error::custom),
                _ => Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str_is_case_sensitive() {
        assert_eq!(
            "Confirmed".parse::<AppointmentStatus>().unwrap(),
            AppointmentStatus::Confirmed
        );
        assert!("confirmed".parse::<AppointmentStatus>().is_err());
        assert!("Done".parse::<AppointmentStatus>().is_err());
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(
            "Video Call".parse::<AppointmentMode>().unwrap(),
            AppointmentMode::VideoCall
        );
        assert_eq!(AppointmentMode::InPerson.to_string(), "In-Person");
        assert_eq!(
            "Fax".parse::<AppointmentMode>(),
            Err(AppointmentError::InvalidMode("Fax".to_string()))
        );
    }

    #[test]
    fn test_serializes_in_ui_shape() {
        let appointment = Appointment {
            id: 7,
            patient_name: "Priya Nair".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 29).unwrap(),
            time: NaiveTime::from_hms_opt(15, 30, 0).unwrap(),
            duration: 45,
            doctor_name: "Dr. Amit Patel".to_string(),
            status: AppointmentStatus::Cancelled,
            mode: AppointmentMode::InPerson,
            reason: "Skin Consultation".to_string(),
            phone: String::new(),
            email: String::new(),
            notes: String::new(),
        };

        let json = serde_json::to_value(&appointment).unwrap();
        assert_eq!(json["patientName"], "Priya Nair");
        assert_eq!(json["doctorName"], "Dr. Amit Patel");
        assert_eq!(json["date"], "2026-01-29");
        assert_eq!(json["time"], "15:30");
        assert_eq!(json["status"], "Cancelled");
        assert_eq!(json["mode"], "In-Person");

        let back: Appointment = serde_json::from_value(json).unwrap();
        assert_eq!(back, appointment);
    }

    #[test]
    fn test_parse_time_rejects_garbage() {
        assert_eq!(
            parse_time("9am"),
            Err(AppointmentError::InvalidTime("9am".to_string()))
        );
        assert_eq!(
            parse_time("09:15").unwrap(),
            NaiveTime::from_hms_opt(9, 15, 0).unwrap()
        );
    }
}
