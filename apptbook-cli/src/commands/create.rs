use anyhow::Result;
use apptbook_core::appointment::{parse_date, parse_time};
use apptbook_core::{AppointmentMode, AppointmentStatus, AppointmentStore, NewAppointment};
use chrono::{NaiveDate, NaiveTime};
use clap::Args;

use crate::render::Render;

/// Every field is optional at the argument level so that the store can
/// report all missing required fields at once.
#[derive(Args, Debug, Clone, Default)]
pub struct CreateArgs {
    /// Patient name (required)
    #[arg(long)]
    pub patient: Option<String>,

    /// Date, YYYY-MM-DD (required)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Start time, HH:MM (required)
    #[arg(long, value_parser = parse_time)]
    pub time: Option<NaiveTime>,

    /// Duration in minutes (required)
    #[arg(long)]
    pub duration: Option<u32>,

    /// Doctor name (required)
    #[arg(long)]
    pub doctor: Option<String>,

    /// In-Person, Video Call or Phone Call (required)
    #[arg(long)]
    pub mode: Option<AppointmentMode>,

    /// Initial status [default: Scheduled]
    #[arg(long)]
    pub status: Option<AppointmentStatus>,

    #[arg(long)]
    pub reason: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,

    /// Print the created appointment as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<CreateArgs> for NewAppointment {
    fn from(args: CreateArgs) -> Self {
        NewAppointment {
            patient_name: args.patient,
            date: args.date,
            time: args.time,
            duration: args.duration,
            doctor_name: args.doctor,
            mode: args.mode,
            status: args.status,
            reason: args.reason,
            phone: args.phone,
            email: args.email,
            notes: args.notes,
        }
    }
}

pub fn run(store: &mut AppointmentStore, args: CreateArgs) -> Result<()> {
    let json = args.json;

    let appointment = store.create(args.into())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&appointment)?);
    } else {
        println!("Created: {}", appointment.render());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use apptbook_core::{AppointmentError, RequiredField};

    #[test]
    fn test_args_map_onto_request() {
        let args = CreateArgs {
            patient: Some("Test P2".to_string()),
            date: NaiveDate::from_ymd_opt(2026, 1, 30),
            time: NaiveTime::from_hms_opt(12, 0, 0),
            duration: Some(30),
            doctor: Some("Dr. Rajesh Kumar".to_string()),
            mode: Some(AppointmentMode::InPerson),
            ..Default::default()
        };

        let mut store = AppointmentStore::seeded();
        let created = store.create(args.into()).unwrap();
        assert_eq!(created.id, 13);
        assert_eq!(created.status, AppointmentStatus::Scheduled);
    }

    #[test]
    fn test_run_reports_missing_fields() {
        let mut store = AppointmentStore::seeded();
        let args = CreateArgs {
            patient: Some("Test P".to_string()),
            ..Default::default()
        };

        let err = run(&mut store, args).unwrap_err();
        let err = err.downcast::<AppointmentError>().unwrap();
        match err {
            AppointmentError::Validation { missing } => {
                assert_eq!(missing.len(), 5);
                assert!(!missing.contains(&RequiredField::PatientName));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(store.len(), 12);
    }
}
