use agenda_core::{config, Event, EventStore};
use anyhow::Result;
use chrono::Duration;

use crate::commands::short_id;
use crate::datetime::{parse_datetime, parse_duration};

pub fn run(
    title: String,
    start: String,
    end: Option<String>,
    duration: Option<String>,
    description: Option<String>,
    location: Option<String>,
    reminder: Option<u32>,
) -> Result<()> {
    if title.trim().is_empty() {
        anyhow::bail!("Event title cannot be empty");
    }

    let cfg = config::load_config()?;
    let mut store = EventStore::open(cfg.events_path())?;

    let start = parse_datetime(&start)?;

    // Calculate end time from --end, --duration, or the one-hour default
    let end = match (end, duration) {
        (Some(end), _) => parse_datetime(&end)?,
        (None, Some(duration)) => start + parse_duration(&duration)?,
        (None, None) => start + Duration::hours(1),
    };

    if end < start {
        anyhow::bail!("Event cannot end before it starts");
    }

    let mut event = Event::new(title, start, end);
    event.description = description.filter(|d| !d.is_empty());
    event.location = location.filter(|l| !l.is_empty());
    event.reminder_minutes = Some(reminder.unwrap_or(cfg.default_reminder_minutes));

    let created = format!("{} ({})", event.title, short_id(&event.id));
    store.add(event)?;

    println!("Created: {}", created);

    Ok(())
}
