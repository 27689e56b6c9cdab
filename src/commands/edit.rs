use agenda_core::{config, EventStore};
use anyhow::Result;

use crate::commands::{resolve_id, short_id};
use crate::datetime::{parse_datetime, parse_duration};

#[allow(clippy::too_many_arguments)]
pub fn run(
    id: String,
    title: Option<String>,
    start: Option<String>,
    end: Option<String>,
    duration: Option<String>,
    description: Option<String>,
    location: Option<String>,
    reminder: Option<u32>,
) -> Result<()> {
    let cfg = config::load_config()?;
    let mut store = EventStore::open(cfg.events_path())?;

    let id = resolve_id(&store, &id)?;
    let mut event = store
        .get(&id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("No event matches id '{}'", id))?;

    if let Some(title) = title {
        if title.trim().is_empty() {
            anyhow::bail!("Event title cannot be empty");
        }
        event.title = title;
    }
    if let Some(start) = start {
        event.start = parse_datetime(&start)?;
    }
    if let Some(end) = end {
        event.end = parse_datetime(&end)?;
    } else if let Some(duration) = duration {
        event.end = event.start + parse_duration(&duration)?;
    }
    if let Some(description) = description {
        event.description = if description.is_empty() {
            None
        } else {
            Some(description)
        };
    }
    if let Some(location) = location {
        event.location = if location.is_empty() {
            None
        } else {
            Some(location)
        };
    }
    if let Some(reminder) = reminder {
        event.reminder_minutes = Some(reminder);
    }

    if event.end < event.start {
        anyhow::bail!("Event cannot end before it starts");
    }

    let updated = format!("{} ({})", event.title, short_id(&id));
    store.update(&id, event)?;

    println!("Updated: {}", updated);

    Ok(())
}
