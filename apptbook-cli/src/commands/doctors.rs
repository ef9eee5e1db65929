use anyhow::Result;
use apptbook_core::AppointmentStore;
use owo_colors::OwoColorize;

pub fn run(store: &AppointmentStore) -> Result<()> {
    let doctors = store.doctors();

    if doctors.is_empty() {
        println!("{}", "   No doctors".dimmed());
        return Ok(());
    }

    for doctor in doctors {
        println!("   {}", doctor.cyan());
    }

    Ok(())
}
