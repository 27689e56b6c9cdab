//! The calendar event entity.
//!
//! Events are plain data: the store owns persistence and the reminder
//! scheduler owns notification timing. Timestamps are absolute instants,
//! entered and displayed in local wall-clock time.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-scheduled calendar entry with a time range and optional reminder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Opaque unique identifier, assigned at creation, never reused
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    /// Expected to be >= `start`; the form layer enforces this, the store
    /// does not
    pub end: DateTime<Utc>,
    pub location: Option<String>,
    /// Minutes before `start` at which a notification fires.
    /// `None` and `Some(0)` both mean "no reminder".
    #[serde(default)]
    pub reminder_minutes: Option<u32>,
}

impl Event {
    /// Create an event with a fresh id and no optional fields set.
    pub fn new(title: String, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Event {
            id: Uuid::new_v4().to_string(),
            title,
            description: None,
            start,
            end,
            location: None,
            reminder_minutes: None,
        }
    }

    /// The effective reminder offset, treating zero as "no reminder".
    pub fn reminder_offset(&self) -> Option<Duration> {
        match self.reminder_minutes {
            Some(minutes) if minutes > 0 => Some(Duration::minutes(minutes as i64)),
            _ => None,
        }
    }
}
