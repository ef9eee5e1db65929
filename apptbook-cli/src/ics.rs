//! ICS export of appointments.

use anyhow::{Context, Result};
use apptbook_core::{Appointment, AppointmentStatus};
use chrono::{Duration, NaiveDateTime};
use icalendar::{Calendar, Component, EventLike};

/// Generate one .ics calendar holding every given appointment.
///
/// Times are written as floating local times, the same way they are booked.
pub fn generate_ics<'a>(
    appointments: impl IntoIterator<Item = &'a Appointment>,
    calendar_name: &str,
) -> String {
    let mut cal = Calendar::new();
    cal.name(calendar_name);

    for appointment in appointments {
        cal.push(appointment_event(appointment));
    }

    strip_ics_bloat(&cal.done().to_string())
}

pub fn write_ics(path: &std::path::Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

fn appointment_event(appointment: &Appointment) -> icalendar::Event {
    let mut event = icalendar::Event::new();
    event.uid(&format!("appointment-{}@apptbook", appointment.id));
    event.summary(&format!(
        "{} with {}",
        appointment.patient_name, appointment.doctor_name
    ));

    let start = appointment.date.and_time(appointment.time);
    let end = start + Duration::minutes(i64::from(appointment.duration));
    event.add_property("DTSTART", floating(start));
    event.add_property("DTEND", floating(end));

    event.location(appointment.mode.as_str());

    let description = description_for(appointment);
    if !description.is_empty() {
        event.description(&description);
    }

    let status = match appointment.status {
        AppointmentStatus::Confirmed => "CONFIRMED",
        AppointmentStatus::Cancelled => "CANCELLED",
        AppointmentStatus::Scheduled | AppointmentStatus::Upcoming => "TENTATIVE",
    };
    event.add_property("STATUS", status);

    event.done()
}

fn floating(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

fn description_for(appointment: &Appointment) -> String {
    [
        ("Reason", &appointment.reason),
        ("Phone", &appointment.phone),
        ("Email", &appointment.email),
        ("Notes", &appointment.notes),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(label, value)| format!("{label}: {value}"))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Replace the icalendar crate's PRODID and drop CALSCALE:GREGORIAN (the default).
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:APPTBOOK\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use apptbook_core::AppointmentStore;
    use apptbook_core::AppointmentFilter;

    #[test]
    fn test_generate_ics_for_day() {
        let store = AppointmentStore::seeded();
        let filter = AppointmentFilter::new().doctor_name("Dr. Rajesh Kumar");
        let ics = generate_ics(store.list(&filter), "Riverside Clinic");

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.contains("PRODID:APPTBOOK\r\n"));
        assert!(!ics.contains("CALSCALE"));
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 4);
        assert!(ics.contains("UID:appointment-1@apptbook"));
        assert!(ics.contains("SUMMARY:Sarah Johnson with Dr. Rajesh Kumar"));
        assert!(ics.contains("DTSTART:20260130T090000"));
        assert!(ics.contains("DTEND:20260130T093000"));
        assert!(ics.contains("STATUS:CONFIRMED"));
    }

    #[test]
    fn test_status_mapping() {
        let store = AppointmentStore::seeded();
        let cancelled = store.get(7).unwrap();
        let scheduled = store.get(2).unwrap();

        let ics = generate_ics([cancelled], "Clinic");
        assert!(ics.contains("STATUS:CANCELLED"));
        assert!(ics.contains("DTEND:20260129T161500"));

        let ics = generate_ics([scheduled], "Clinic");
        assert!(ics.contains("STATUS:TENTATIVE"));
    }

    #[test]
    fn test_description_skips_empty_fields() {
        let store = AppointmentStore::seeded();
        let appointment = store.get(2).unwrap();

        assert_eq!(
            description_for(appointment),
            "Reason: Annual Physical Examination\nPhone: +91 98765 43211\nEmail: m.chen@email.com"
        );
    }

    #[test]
    fn test_empty_export_is_valid_calendar() {
        let ics = generate_ics(std::iter::empty(), "Clinic");
        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(ics.contains("END:VCALENDAR"));
        assert!(!ics.contains("BEGIN:VEVENT"));
    }
}
