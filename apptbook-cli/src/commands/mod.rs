pub mod config;
pub mod create;
pub mod delete;
pub mod doctors;
pub mod export;
pub mod list;
pub mod shell;
pub mod stats;
pub mod status;

use anyhow::Result;
use apptbook_core::appointment::parse_date;
use apptbook_core::config::AppConfig;
use apptbook_core::{AppointmentFilter, AppointmentStatus, AppointmentStore};
use chrono::NaiveDate;
use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List appointments, optionally filtered
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Book a new appointment
    Create(create::CreateArgs),
    /// Change the status of an appointment
    Status {
        id: u64,
        /// Scheduled, Confirmed, Upcoming or Cancelled
        status: AppointmentStatus,
    },
    /// Delete an appointment
    Delete { id: u64 },
    /// List doctors with appointments
    Doctors,
    /// Show dashboard counters
    Stats {
        /// Date to treat as today (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,

        #[arg(long)]
        json: bool,
    },
    /// Export appointments as an .ics calendar
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
    /// Show configuration
    Config,
    /// Run several commands against one store (read from stdin)
    Shell,
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Only this status
    #[arg(long)]
    pub status: Option<AppointmentStatus>,

    /// Only this doctor (exact name)
    #[arg(long)]
    pub doctor: Option<String>,
}

impl From<FilterArgs> for AppointmentFilter {
    fn from(args: FilterArgs) -> Self {
        AppointmentFilter {
            date: args.date,
            status: args.status,
            doctor_name: args.doctor,
        }
    }
}

/// Run one command against `store`.
pub fn run(command: Commands, store: &mut AppointmentStore, cfg: &AppConfig) -> Result<()> {
    match command {
        Commands::List { filter, json } => list::run(store, filter.into(), json),
        Commands::Create(args) => create::run(store, args),
        Commands::Status { id, status } => status::run(store, id, status),
        Commands::Delete { id } => delete::run(store, id),
        Commands::Doctors => doctors::run(store),
        Commands::Stats { today, json } => {
            stats::run(store, today.unwrap_or_else(|| cfg.today()), json)
        }
        Commands::Export { filter, output } => {
            export::run(store, filter.into(), output.as_deref(), &cfg.clinic_name)
        }
        Commands::Config => config::run(cfg),
        Commands::Shell => shell::run(store, cfg),
    }
}
