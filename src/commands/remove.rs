use agenda_core::{config, EventStore};
use anyhow::Result;

use crate::commands::{resolve_id, short_id};

pub fn run(id: String) -> Result<()> {
    let cfg = config::load_config()?;
    let mut store = EventStore::open(cfg.events_path())?;

    let id = resolve_id(&store, &id)?;
    let removed = store.remove(&id)?;

    println!("Removed: {} ({})", removed.title, short_id(&id));

    Ok(())
}
