mod desktop;

use std::collections::{HashMap, HashSet};
use std::time::SystemTime;

use agenda_core::{config, Event, EventStore, ReminderScheduler};
use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "agenda-notify")]
#[command(about = "Deliver agenda event reminders as desktop notifications")]
struct Cli {
    /// Seconds between checks for schedule changes
    #[arg(long, default_value_t = 30)]
    poll: u64,

    /// Print alerts to the terminal instead of the desktop
    #[arg(long)]
    terminal: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let cfg = config::load_config()?;
    let events_path = cfg.events_path();

    let sink = desktop::detect(cli.terminal);
    log::info!("Delivering reminders via the {} sink", sink.name());
    if let Err(e) = sink.request_permission() {
        // Reminders degrade to nothing; the rest of the tool keeps working
        log::warn!("Notification permission request failed: {}", e);
    }

    let scheduler = ReminderScheduler::new(sink);
    let mut seen: HashMap<String, Event> = HashMap::new();
    let mut last_modified: Option<SystemTime> = None;
    let mut loaded_once = false;

    let mut ticker = tokio::time::interval(std::time::Duration::from_secs(cli.poll.max(1)));

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                log::info!("Shutting down");
                break;
            }
        }

        let modified = std::fs::metadata(&events_path)
            .ok()
            .and_then(|m| m.modified().ok());
        if loaded_once && modified == last_modified {
            continue;
        }

        match EventStore::open(&events_path) {
            Ok(store) => {
                reconcile(&scheduler, &mut seen, store.events());
                log::debug!(
                    "Reconciled {} events, {} reminders pending",
                    store.events().len(),
                    scheduler.pending_count()
                );
                last_modified = modified;
                loaded_once = true;
            }
            // Mid-write or corrupt file: keep the current schedule, retry later
            Err(e) => log::warn!("Could not reload {}: {}", events_path.display(), e),
        }
    }

    Ok(())
}

/// Bring the scheduler in line with the stored collection.
///
/// Cancellation strictly precedes rescheduling for an edited event, so a
/// stale reminder for the pre-edit time is never left pending alongside the
/// new one.
fn reconcile(
    scheduler: &ReminderScheduler,
    seen: &mut HashMap<String, Event>,
    events: &[Event],
) {
    let current_ids: HashSet<&str> = events.iter().map(|e| e.id.as_str()).collect();
    seen.retain(|id, _| {
        if current_ids.contains(id.as_str()) {
            true
        } else {
            scheduler.cancel(id);
            false
        }
    });

    for event in events {
        match seen.get(&event.id) {
            Some(old) if old == event => continue,
            Some(_) => {
                scheduler.cancel(&event.id);
                scheduler.schedule(event);
            }
            None => scheduler.schedule(event),
        }
        seen.insert(event.id.clone(), event.clone());
    }
}
