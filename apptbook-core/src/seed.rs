//! Demo appointments a store can start from.

use chrono::{NaiveDate, NaiveTime};

use crate::appointment::{Appointment, AppointmentMode, AppointmentStatus};

use AppointmentMode::{InPerson, PhoneCall, VideoCall};
use AppointmentStatus::{Cancelled, Confirmed, Scheduled, Upcoming};

/// First id handed out by a store loaded with [`appointments`].
pub const NEXT_ID: u64 = 13;

/// Twelve appointments across six dates, four doctors, every status and
/// every mode. No two non-cancelled entries for the same doctor and date overlap.
pub fn appointments() -> Vec<Appointment> {
    vec![
        seed(
            1,
            "Sarah Johnson",
            (2026, 1, 30),
            (9, 0),
            30,
            "Dr. Rajesh Kumar",
            Confirmed,
            InPerson,
            "Diabetes Management",
            "+91 98765 43210",
            "sarah.j@email.com",
            "Patient needs prescription refill",
        ),
        seed(
            2,
            "Michael Chen",
            (2026, 1, 30),
            (10, 0),
            45,
            "Dr. Priya Sharma",
            Scheduled,
            InPerson,
            "Annual Physical Examination",
            "+91 98765 43211",
            "m.chen@email.com",
            "",
        ),
        seed(
            3,
            "Emily Rodriguez",
            (2026, 1, 30),
            (11, 30),
            30,
            "Dr. Rajesh Kumar",
            Confirmed,
            VideoCall,
            "Cold and Flu Symptoms",
            "+91 98765 43212",
            "emily.r@email.com",
            "Video consultation requested",
        ),
        seed(
            4,
            "Rahul Sharma",
            (2026, 1, 31),
            (9, 0),
            30,
            "Dr. Priya Sharma",
            Upcoming,
            InPerson,
            "General Checkup",
            "+91 98765 43213",
            "rahul.s@email.com",
            "",
        ),
        seed(
            5,
            "Anita Desai",
            (2026, 1, 31),
            (14, 0),
            45,
            "Dr. Amit Patel",
            Upcoming,
            VideoCall,
            "Follow-up Consultation",
            "+91 98765 43214",
            "anita.d@email.com",
            "",
        ),
        seed(
            6,
            "Vikram Singh",
            (2026, 1, 29),
            (10, 0),
            30,
            "Dr. Rajesh Kumar",
            Confirmed,
            InPerson,
            "Blood Pressure Check",
            "+91 98765 43215",
            "vikram.s@email.com",
            "Regular checkup",
        ),
        seed(
            7,
            "Priya Nair",
            (2026, 1, 29),
            (15, 30),
            45,
            "Dr. Amit Patel",
            Cancelled,
            InPerson,
            "Skin Consultation",
            "+91 98765 43216",
            "priya.n@email.com",
            "Patient cancelled",
        ),
        seed(
            8,
            "Deepak Malhotra",
            (2026, 2, 1),
            (9, 30),
            30,
            "Dr. Priya Sharma",
            Scheduled,
            InPerson,
            "Vaccination",
            "+91 98765 43217",
            "deepak.m@email.com",
            "",
        ),
        seed(
            9,
            "Sunita Verma",
            (2026, 2, 1),
            (11, 0),
            60,
            "Dr. Rajesh Kumar",
            Upcoming,
            InPerson,
            "Complete Health Checkup",
            "+91 98765 43218",
            "sunita.v@email.com",
            "",
        ),
        seed(
            10,
            "Kiran Joshi",
            (2026, 1, 30),
            (16, 0),
            30,
            "Dr. Amit Patel",
            Confirmed,
            PhoneCall,
            "Test Results Discussion",
            "+91 98765 43219",
            "kiran.j@email.com",
            "",
        ),
        seed(
            11,
            "Neha Kapoor",
            (2026, 1, 28),
            (10, 30),
            30,
            "Dr. Amit Patel",
            Confirmed,
            PhoneCall,
            "Medication Review",
            "+91 98765 43220",
            "neha.k@email.com",
            "Past appointment - completed",
        ),
        seed(
            12,
            "Amit Tiwari",
            (2026, 2, 2),
            (14, 30),
            45,
            "Dr. Meera Iyer",
            Scheduled,
            VideoCall,
            "Mental Health Consultation",
            "+91 98765 43221",
            "amit.t@email.com",
            "First time patient",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: u64,
    patient_name: &str,
    (year, month, day): (i32, u32, u32),
    (hour, minute): (u32, u32),
    duration: u32,
    doctor_name: &str,
    status: AppointmentStatus,
    mode: AppointmentMode,
    reason: &str,
    phone: &str,
    email: &str,
    notes: &str,
) -> Appointment {
    Appointment {
        id,
        patient_name: patient_name.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default(),
        duration,
        doctor_name: doctor_name.to_string(),
        status,
        mode,
        reason: reason.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        notes: notes.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_coverage() {
        let appointments = appointments();
        assert_eq!(appointments.len(), 12);

        let dates: HashSet<_> = appointments.iter().map(|a| a.date).collect();
        let doctors: HashSet<_> = appointments.iter().map(|a| a.doctor_name.as_str()).collect();
        let statuses: HashSet<_> = appointments.iter().map(|a| a.status).collect();
        let modes: HashSet<_> = appointments.iter().map(|a| a.mode).collect();

        assert!(dates.len() >= 5);
        assert_eq!(doctors.len(), 4);
        assert_eq!(statuses.len(), 4);
        assert_eq!(modes.len(), 3);
    }

    #[test]
    fn test_ids_are_unique_and_below_next_id() {
        let appointments = appointments();
        let ids: HashSet<u64> = appointments.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), appointments.len());
        assert!(ids.iter().all(|id| *id < NEXT_ID));
    }

    #[test]
    fn test_fixture_has_no_double_bookings() {
        let appointments = appointments();
        for (i, a) in appointments.iter().enumerate() {
            for b in &appointments[i + 1..] {
                if a.blocks_time()
                    && b.blocks_time()
                    && a.doctor_name == b.doctor_name
                    && a.date == b.date
                {
                    assert!(!a.slot().overlaps(&b.slot()), "{} overlaps {}", a, b);
                }
            }
        }
    }
}
