use std::path::Path;

use anyhow::Result;
use apptbook_core::{AppointmentFilter, AppointmentStore};

use crate::ics;
use crate::render::pluralize;

pub fn run(
    store: &AppointmentStore,
    filter: AppointmentFilter,
    output: Option<&Path>,
    calendar_name: &str,
) -> Result<()> {
    let appointments = store.list(&filter);
    let content = ics::generate_ics(appointments.iter().copied(), calendar_name);

    match output {
        Some(path) => {
            ics::write_ics(path, &content)?;
            let count = appointments.len();
            println!(
                "Exported {} {} to {}",
                count,
                pluralize("appointment", count),
                path.display()
            );
        }
        None => print!("{}", content),
    }

    Ok(())
}
