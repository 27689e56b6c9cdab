use agenda_core::store::local_day;
use agenda_core::{config, Event, EventStore};
use anyhow::Result;

use crate::commands::{format_date_label, print_event_line};

pub fn run() -> Result<()> {
    let cfg = config::load_config()?;
    let store = EventStore::open(cfg.events_path())?;

    // Storage order is insertion order; sort by start for display
    let mut events: Vec<&Event> = store.events().iter().collect();
    events.sort_by_key(|e| e.start);

    if events.is_empty() {
        println!("No events yet. Create one with `agenda add`.");
        return Ok(());
    }

    // Group events by day and print
    let mut current_day = None;
    for event in events {
        let day = local_day(event.start);
        if current_day != Some(day) {
            if current_day.is_some() {
                println!();
            }
            println!("{}", format_date_label(day));
            current_day = Some(day);
        }
        print_event_line(event);
    }

    Ok(())
}
