mod commands;
mod ics;
mod render;

use std::process::ExitCode;

use anyhow::Result;
use apptbook_core::config::AppConfig;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::Commands;
use render::render_error;

#[derive(Parser)]
#[command(name = "apptbook")]
#[command(about = "Browse and book clinic appointments")]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", render_error(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let cfg = AppConfig::load()?;
    init_logging(&cfg, cli.verbose);

    tracing::debug!(clinic = %cfg.clinic_name, seeded = cfg.seed_demo_data, "starting");

    let mut store = cfg.store();
    commands::run(cli.command, &mut store, &cfg)
}

/// Log to stderr so stdout stays clean for JSON and ICS output.
fn init_logging(cfg: &AppConfig, verbose: bool) {
    let default_level = if verbose { "debug" } else { cfg.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
