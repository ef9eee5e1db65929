use anyhow::Result;
use apptbook_core::AppointmentStore;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(store: &AppointmentStore, today: NaiveDate, json: bool) -> Result<()> {
    let stats = store.stats(today);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", format!("Stats for {}", today.format("%Y-%m-%d")).bold());
    println!("{}", stats.render());

    Ok(())
}
