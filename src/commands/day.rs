use agenda_core::{config, EventStore};
use anyhow::Result;
use chrono::Local;

use crate::commands::{format_date_label, print_event_line};
use crate::datetime::parse_date;

pub fn run(date: Option<String>) -> Result<()> {
    let cfg = config::load_config()?;
    let store = EventStore::open(cfg.events_path())?;

    let date = match date {
        Some(s) => parse_date(&s)?,
        None => Local::now().date_naive(),
    };

    let mut events = store.events_on(date);
    events.sort_by_key(|e| e.start);

    if events.is_empty() {
        println!("No events on {}", date.format("%a %b %-d %Y"));
        return Ok(());
    }

    println!("{}", format_date_label(date));
    for event in events {
        print_event_line(event);
    }

    Ok(())
}
