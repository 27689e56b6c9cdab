//! Alert delivery seam.
//!
//! Two interchangeable collaborators can present a reminder to the user: a
//! desktop notification sink (in `agenda-notify`, where the desktop
//! dependency lives) and the terminal fallback below. The daemon picks one
//! at startup and hands it to the scheduler.

use crate::error::AgendaResult;

/// A user-visible alert, ready for delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    /// Stable integer identity derived from the event id
    pub id: u32,
    pub title: String,
    pub body: String,
}

pub trait AlertSink: Send + Sync {
    /// Ask the platform for permission to alert the user. Called once at
    /// startup; best-effort.
    fn request_permission(&self) -> AgendaResult<()>;

    /// Present the alert to the user.
    fn deliver(&self, alert: &Alert) -> AgendaResult<()>;

    /// Short name for log lines.
    fn name(&self) -> &'static str;
}

/// Fallback sink: prints the alert to the controlling terminal.
///
/// No permission model and nothing durable: the alert only reaches the
/// user if the process is still running at fire time.
pub struct TerminalSink;

impl AlertSink for TerminalSink {
    fn request_permission(&self) -> AgendaResult<()> {
        Ok(())
    }

    fn deliver(&self, alert: &Alert) -> AgendaResult<()> {
        // \x07 rings the terminal bell
        eprintln!("\x07{}: {}", alert.title, alert.body);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "terminal"
    }
}
