//! Durable event storage.
//!
//! The whole collection lives in a single JSON file under the data
//! directory. Every mutation rewrites the file synchronously; there is no
//! partial-write protection and no transaction log. That is acceptable for
//! a personal calendar of at most a few hundred events, and a documented
//! limitation rather than a robustness guarantee.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::error::{AgendaError, AgendaResult};
use crate::event::Event;

/// Filename of the persisted event collection inside the data directory.
pub const EVENTS_FILE: &str = "events.json";

/// Single source of truth for the event collection.
///
/// Callers hold an explicit `EventStore` value; there is no ambient
/// singleton. All mutations persist before returning.
#[derive(Debug)]
pub struct EventStore {
    path: PathBuf,
    events: Vec<Event>,
}

impl EventStore {
    /// Open the store at `path`, loading any previously persisted events.
    ///
    /// A missing file is an empty store. Unparseable content is an error:
    /// treating a corrupt file as empty would overwrite the user's data on
    /// the next mutation.
    pub fn open(path: impl Into<PathBuf>) -> AgendaResult<Self> {
        let path = path.into();
        let events = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            serde_json::from_str(&contents)
                .map_err(|e| AgendaError::Serialization(format!("{}: {}", path.display(), e)))?
        } else {
            Vec::new()
        };

        Ok(EventStore { path, events })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All events, in insertion order. Consumers re-sort for display.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Append a new event and persist the collection.
    pub fn add(&mut self, event: Event) -> AgendaResult<()> {
        if self.get(&event.id).is_some() {
            return Err(AgendaError::DuplicateId(event.id));
        }
        self.events.push(event);
        self.persist()
    }

    /// Replace the event matching `id` and persist the collection.
    ///
    /// The stored id is pinned to the lookup key: whatever id the
    /// replacement record carries is overwritten, so an edit can never
    /// change an event's identity.
    pub fn update(&mut self, id: &str, mut event: Event) -> AgendaResult<()> {
        let pos = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AgendaError::EventNotFound(id.to_string()))?;

        event.id = id.to_string();
        self.events[pos] = event;
        self.persist()
    }

    /// Remove the event matching `id`, persist, and return the removed
    /// record.
    pub fn remove(&mut self, id: &str) -> AgendaResult<Event> {
        let pos = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AgendaError::EventNotFound(id.to_string()))?;

        let removed = self.events.remove(pos);
        self.persist()?;
        Ok(removed)
    }

    /// All events whose start falls on `date` (local calendar day), in
    /// storage order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| local_day(e.start) == date)
            .collect()
    }

    /// Rewrite the whole collection to disk.
    fn persist(&self) -> AgendaResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(&self.events)
            .map_err(|e| AgendaError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// The local calendar day an instant falls on.
pub fn local_day(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&Local).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    fn make_test_event(title: &str, start: DateTime<Utc>) -> Event {
        Event::new(title.to_string(), start, start + Duration::hours(1))
    }

    fn local_instant(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn open_store(dir: &TempDir) -> EventStore {
        EventStore::open(dir.path().join(EVENTS_FILE)).unwrap()
    }

    #[test]
    fn open_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        assert!(store.events().is_empty());
    }

    #[test]
    fn open_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(EVENTS_FILE);
        std::fs::write(&path, "not json{").unwrap();

        let err = EventStore::open(&path).unwrap_err();
        assert!(matches!(err, AgendaError::Serialization(_)));
    }

    #[test]
    fn add_then_reopen_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut event = make_test_event("Dentist", local_instant(2025, 3, 20, 15, 0));
        event.description = Some("Checkup".to_string());
        event.location = Some("Main St 4".to_string());
        event.reminder_minutes = Some(10);

        let mut store = open_store(&dir);
        store.add(event.clone()).unwrap();

        // Simulated process restart: a fresh store over the same file
        let reopened = open_store(&dir);
        assert_eq!(reopened.events(), &[event]);
    }

    #[test]
    fn add_rejects_duplicate_id() {
        let dir = TempDir::new().unwrap();
        let event = make_test_event("Standup", local_instant(2025, 3, 20, 9, 0));

        let mut store = open_store(&dir);
        store.add(event.clone()).unwrap();

        let err = store.add(event).unwrap_err();
        assert!(matches!(err, AgendaError::DuplicateId(_)));
        assert_eq!(store.events().len(), 1);
        assert_eq!(open_store(&dir).events().len(), 1);
    }

    #[test]
    fn update_replaces_in_place_and_pins_id() {
        let dir = TempDir::new().unwrap();
        let first = make_test_event("First", local_instant(2025, 3, 20, 9, 0));
        let second = make_test_event("Second", local_instant(2025, 3, 21, 9, 0));
        let id = first.id.clone();

        let mut store = open_store(&dir);
        store.add(first).unwrap();
        store.add(second).unwrap();

        // The replacement record carries its own (different) id
        let mut replacement = make_test_event("First, moved", local_instant(2025, 3, 20, 14, 0));
        replacement.reminder_minutes = Some(5);
        store.update(&id, replacement).unwrap();

        let reopened = open_store(&dir);
        assert_eq!(reopened.events().len(), 2);
        let updated = &reopened.events()[0];
        assert_eq!(updated.id, id);
        assert_eq!(updated.title, "First, moved");
        assert_eq!(updated.start, local_instant(2025, 3, 20, 14, 0));
        assert_eq!(updated.reminder_minutes, Some(5));
    }

    #[test]
    fn update_unknown_id_is_an_error() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let event = make_test_event("Orphan", local_instant(2025, 3, 20, 9, 0));

        let err = store.update("missing", event).unwrap_err();
        assert!(matches!(err, AgendaError::EventNotFound(_)));
    }

    #[test]
    fn remove_drops_exactly_one() {
        let dir = TempDir::new().unwrap();
        let keep = make_test_event("Keep", local_instant(2025, 3, 20, 9, 0));
        let drop = make_test_event("Drop", local_instant(2025, 3, 20, 11, 0));
        let drop_id = drop.id.clone();

        let mut store = open_store(&dir);
        store.add(keep).unwrap();
        store.add(drop).unwrap();

        let removed = store.remove(&drop_id).unwrap();
        assert_eq!(removed.title, "Drop");

        let reopened = open_store(&dir);
        assert_eq!(reopened.events().len(), 1);
        assert!(reopened.get(&drop_id).is_none());
    }

    #[test]
    fn remove_unknown_id_is_an_error() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let err = store.remove("missing").unwrap_err();
        assert!(matches!(err, AgendaError::EventNotFound(_)));
    }

    #[test]
    fn events_on_filters_by_local_day() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let morning = make_test_event("Morning", local_instant(2025, 3, 20, 0, 0));
        let evening = make_test_event("Evening", local_instant(2025, 3, 20, 23, 30));
        let next_day = make_test_event("Next day", local_instant(2025, 3, 21, 0, 0));
        store.add(morning.clone()).unwrap();
        store.add(evening.clone()).unwrap();
        store.add(next_day).unwrap();

        let day = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        let on_day = store.events_on(day);
        assert_eq!(on_day.len(), 2);
        assert_eq!(on_day[0].id, morning.id);
        assert_eq!(on_day[1].id, evening.id);
    }

    #[test]
    fn events_on_empty_day_is_empty() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store
            .add(make_test_event("Lone", local_instant(2025, 3, 20, 9, 0)))
            .unwrap();

        let other_day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(store.events_on(other_day).is_empty());
    }
}
