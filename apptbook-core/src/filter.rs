//! Filter for listing appointments.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::appointment::{Appointment, AppointmentStatus};

/// Optional equality constraints, combined with AND.
/// `None` fields impose no constraint; the default filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentFilter {
    pub date: Option<NaiveDate>,
    pub status: Option<AppointmentStatus>,
    /// Matched exactly, case-sensitive
    pub doctor_name: Option<String>,
}

impl AppointmentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn status(mut self, status: AppointmentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn doctor_name(mut self, doctor_name: impl Into<String>) -> Self {
        self.doctor_name = Some(doctor_name.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.status.is_none() && self.doctor_name.is_none()
    }

    pub fn matches(&self, appointment: &Appointment) -> bool {
        self.date.is_none_or(|d| appointment.date == d)
            && self.status.is_none_or(|s| appointment.status == s)
            && self
                .doctor_name
                .as_deref()
                .is_none_or(|name| appointment.doctor_name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = AppointmentFilter::new();
        assert!(filter.is_empty());
        assert!(seed::appointments().iter().all(|a| filter.matches(a)));
    }

    #[test]
    fn test_doctor_name_is_case_sensitive() {
        let appointments = seed::appointments();
        let exact = AppointmentFilter::new().doctor_name("Dr. Amit Patel");
        let lower = AppointmentFilter::new().doctor_name("dr. amit patel");

        assert!(appointments.iter().any(|a| exact.matches(a)));
        assert!(!appointments.iter().any(|a| lower.matches(a)));
    }

    #[test]
    fn test_fields_combine_with_and() {
        let appointments = seed::appointments();
        let filter = AppointmentFilter::new()
            .date(NaiveDate::from_ymd_opt(2026, 1, 30).unwrap())
            .status(AppointmentStatus::Confirmed);

        let ids: Vec<u64> = appointments
            .iter()
            .filter(|a| filter.matches(a))
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec![1, 3, 10]);
    }
}
