use anyhow::Result;
use apptbook_core::AppointmentStore;

pub fn run(store: &mut AppointmentStore, id: u64) -> Result<()> {
    if !store.delete(id) {
        anyhow::bail!("Appointment #{} not found", id);
    }

    println!("Deleted appointment #{}", id);
    Ok(())
}
