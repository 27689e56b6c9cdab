//! CLI command implementations.
//!
//! Every command goes through the event store; reminder delivery is the
//! `agenda-notify` daemon's job, which picks up store changes on its own.

pub mod add;
pub mod day;
pub mod edit;
pub mod list;
pub mod remove;

use agenda_core::{Event, EventStore};
use anyhow::Result;
use chrono::{Local, NaiveDate};

/// Resolve a full event id from a possibly abbreviated prefix.
pub fn resolve_id(store: &EventStore, prefix: &str) -> Result<String> {
    let matches: Vec<&Event> = store
        .events()
        .iter()
        .filter(|e| e.id.starts_with(prefix))
        .collect();

    match matches.len() {
        0 => anyhow::bail!("No event matches id '{}'", prefix),
        1 => Ok(matches[0].id.clone()),
        n => anyhow::bail!("Id '{}' is ambiguous: {} events match", prefix, n),
    }
}

/// Short version of an event id for display
pub fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Thu Mar 20")
pub fn format_date_label(date: NaiveDate) -> String {
    let today = Local::now().date_naive();

    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d %Y").to_string(),
    }
}

/// Print one event line for day/list output.
pub fn print_event_line(event: &Event) {
    let start = event.start.with_timezone(&Local).format("%H:%M");
    let end = event.end.with_timezone(&Local).format("%H:%M");

    let mut line = format!("  {}-{}  {}", start, end, event.title);
    if let Some(ref location) = event.location {
        line.push_str(&format!(" @ {}", location));
    }
    if let Some(offset) = event.reminder_offset() {
        line.push_str(&format!(" (remind {}m before)", offset.num_minutes()));
    }
    println!("{} [{}]", line, short_id(&event.id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_core::store::EVENTS_FILE;
    use chrono::{Duration, Utc};
    use tempfile::TempDir;

    fn store_with_ids(dir: &TempDir, ids: &[&str]) -> EventStore {
        let mut store = EventStore::open(dir.path().join(EVENTS_FILE)).unwrap();
        for id in ids {
            let start = Utc::now();
            let mut event =
                Event::new("Event".to_string(), start, start + Duration::hours(1));
            event.id = id.to_string();
            store.add(event).unwrap();
        }
        store
    }

    #[test]
    fn resolve_id_accepts_unique_prefix() {
        let dir = TempDir::new().unwrap();
        let store = store_with_ids(&dir, &["abc-123", "xyz-456"]);

        assert_eq!(resolve_id(&store, "abc").unwrap(), "abc-123");
        assert_eq!(resolve_id(&store, "xyz-456").unwrap(), "xyz-456");
    }

    #[test]
    fn resolve_id_rejects_unknown_and_ambiguous_prefixes() {
        let dir = TempDir::new().unwrap();
        let store = store_with_ids(&dir, &["abc-123", "abc-456"]);

        assert!(resolve_id(&store, "zzz").is_err());
        assert!(resolve_id(&store, "abc").is_err());
    }

    #[test]
    fn short_id_truncates() {
        assert_eq!(short_id("9b1deb4d-3b7d-4bad"), "9b1deb4d");
        assert_eq!(short_id("ab"), "ab");
    }
}
