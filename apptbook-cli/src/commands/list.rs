use anyhow::Result;
use apptbook_core::{AppointmentFilter, AppointmentStore};
use owo_colors::OwoColorize;

use crate::render::{pluralize, render_list};

pub fn run(store: &AppointmentStore, filter: AppointmentFilter, json: bool) -> Result<()> {
    let appointments = store.list(&filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&appointments)?);
        return Ok(());
    }

    let count = appointments.len();
    println!(
        "{}",
        format!("{} {}", count, pluralize("appointment", count)).bold()
    );
    println!("{}", render_list(&appointments));

    Ok(())
}
