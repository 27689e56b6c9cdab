//! Reminder scheduling.
//!
//! Computes when a reminder is due and owns the pending timers. Delivery
//! goes through an [`AlertSink`]; a failed delivery is logged and swallowed
//! so reminders can never break the CRUD flow. Timers are in-process and do
//! not survive exit; the daemon rebuilds them from the store at startup,
//! which restores every reminder whose fire time is still ahead.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;

use crate::event::Event;
use crate::notify::{Alert, AlertSink};

/// Fixed title for every reminder notification.
pub const REMINDER_TITLE: &str = "Event reminder";

/// Map an event id into the integer identity space used by notification
/// backends (FNV-1a). Stable across runs, so a later `cancel` targets
/// exactly the notification an earlier `schedule` registered, and ids that
/// are not numeric work just as well as ones that are.
pub fn notification_id(event_id: &str) -> u32 {
    const FNV_OFFSET: u32 = 0x811c_9dc5;
    const FNV_PRIME: u32 = 0x0100_0193;

    let mut hash = FNV_OFFSET;
    for byte in event_id.as_bytes() {
        hash ^= u32::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// The absolute instant a reminder for `event` is due, if it has one.
pub fn fire_time(event: &Event) -> Option<DateTime<Utc>> {
    event.reminder_offset().map(|offset| event.start - offset)
}

struct PendingReminder {
    fire_at: DateTime<Utc>,
    handle: JoinHandle<()>,
}

/// Owns the pending reminder timers for the event collection.
///
/// Clones are cheap and share the same pending table. Methods must be
/// called from within a tokio runtime.
#[derive(Clone)]
pub struct ReminderScheduler {
    sink: Arc<dyn AlertSink>,
    pending: Arc<Mutex<HashMap<u32, PendingReminder>>>,
}

impl ReminderScheduler {
    pub fn new(sink: Arc<dyn AlertSink>) -> Self {
        ReminderScheduler {
            sink,
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Arrange for a notification to fire `reminder_minutes` before the
    /// event starts.
    ///
    /// A no-op when the event has no effective reminder offset, or when the
    /// fire time is not strictly in the future (an edit that moves an event
    /// into the past silently drops its reminder). At most one reminder is
    /// pending per event: scheduling again replaces the previous timer.
    /// Never returns an error; delivery failures are logged and swallowed.
    pub fn schedule(&self, event: &Event) {
        let Some(fire_at) = fire_time(event) else {
            return;
        };
        let now = Utc::now();
        if fire_at <= now {
            return;
        }

        let id = notification_id(&event.id);
        let alert = Alert {
            id,
            title: REMINDER_TITLE.to_string(),
            body: format!(
                "{} starts in {} minutes",
                event.title,
                event.reminder_minutes.unwrap_or_default()
            ),
        };

        let delay = (fire_at - now).to_std().unwrap_or_default();
        let sink = Arc::clone(&self.sink);
        let pending = Arc::clone(&self.pending);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = sink.deliver(&alert) {
                log::warn!("Failed to deliver reminder {}: {}", alert.id, e);
            }
            pending.lock().unwrap().remove(&alert.id);
        });

        let previous = self
            .pending
            .lock()
            .unwrap()
            .insert(id, PendingReminder { fire_at, handle });
        if let Some(old) = previous {
            old.handle.abort();
        }
    }

    /// Cancel the pending reminder for `event_id`.
    ///
    /// A no-op when none is pending; never raises to the caller.
    pub fn cancel(&self, event_id: &str) {
        let id = notification_id(event_id);
        if let Some(p) = self.pending.lock().unwrap().remove(&id) {
            p.handle.abort();
        }
    }

    /// Number of reminders currently pending.
    pub fn pending_count(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    /// Fire time of the pending reminder for `event_id`, if one is pending.
    pub fn pending_fire_at(&self, event_id: &str) -> Option<DateTime<Utc>> {
        let id = notification_id(event_id);
        self.pending.lock().unwrap().get(&id).map(|p| p.fire_at)
    }
}
