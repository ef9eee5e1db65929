use anyhow::Result;
use apptbook_core::{AppointmentStatus, AppointmentStore};

use crate::render::Render;

pub fn run(store: &mut AppointmentStore, id: u64, status: AppointmentStatus) -> Result<()> {
    match store.update_status(id, status) {
        Some(appointment) => {
            println!("Updated: {}", appointment.render());
            Ok(())
        }
        None => anyhow::bail!("Appointment #{} not found", id),
    }
}
