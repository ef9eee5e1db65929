//! TUI rendering traits for apptbook types.
//!
//! Extension traits that add colored terminal rendering to apptbook-core
//! types using owo_colors.

use apptbook_core::{Appointment, AppointmentError, AppointmentStatus, ScheduleStats};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for AppointmentStatus {
    fn render(&self) -> String {
        let label = format!("[{}]", self);
        match self {
            AppointmentStatus::Scheduled => label.blue().to_string(),
            AppointmentStatus::Confirmed => label.green().to_string(),
            AppointmentStatus::Upcoming => label.yellow().to_string(),
            AppointmentStatus::Cancelled => label.red().to_string(),
        }
    }
}

impl Render for Appointment {
    fn render(&self) -> String {
        let id = format!("#{:<3}", self.id);
        let when = format!("{} {}", self.date.format("%Y-%m-%d"), self.slot());
        let patient = if self.status == AppointmentStatus::Cancelled {
            self.patient_name.strikethrough().to_string()
        } else {
            self.patient_name.bold().to_string()
        };

        let mut line = format!(
            "{} {} {} {} {} {}",
            id.dimmed(),
            when,
            patient,
            self.doctor_name.cyan(),
            self.status.render(),
            self.mode.dimmed()
        );

        if !self.reason.is_empty() {
            line.push_str(&format!(" {}", format!("- {}", self.reason).dimmed()));
        }

        line
    }
}

impl Render for ScheduleStats {
    fn render(&self) -> String {
        let rows = [
            ("Patients", self.total_patients),
            ("Appointments today", self.appointments_today),
            ("Confirmed today", self.confirmed_today),
            ("Upcoming", self.upcoming_count),
            ("Video calls today", self.video_calls_today),
            ("Doctors", self.total_doctors),
        ];

        rows.iter()
            .map(|(label, value)| format!("   {:<20} {}", label, value.bold()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Render for AppointmentError {
    fn render(&self) -> String {
        match self {
            AppointmentError::Validation { missing } => {
                let fields: Vec<String> = missing.iter().map(|f| format!("  - {f}")).collect();
                format!("{}\n{}", "Missing required fields:".red(), fields.join("\n"))
            }
            other => other.to_string().red().to_string(),
        }
    }
}

/// Render a list of appointments, or a placeholder when there are none.
pub fn render_list(appointments: &[&Appointment]) -> String {
    if appointments.is_empty() {
        return "   No appointments".dimmed().to_string();
    }

    appointments
        .iter()
        .map(|a| format!("   {}", a.render()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a command failure; store errors get their own layout.
pub fn render_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<AppointmentError>() {
        Some(e) => e.render(),
        None => format!("{err:#}").red().to_string(),
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
