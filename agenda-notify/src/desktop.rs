//! Desktop notification sink and capability detection.

use std::sync::Arc;

use agenda_core::notify::{Alert, AlertSink, TerminalSink};
use agenda_core::{AgendaError, AgendaResult};
use notify_rust::Notification;

/// Delivers alerts through the platform notification service.
pub struct DesktopSink;

impl AlertSink for DesktopSink {
    fn request_permission(&self) -> AgendaResult<()> {
        // Platforms with a permission model (macOS) prompt the user on the
        // first delivery; there is nothing to request up front.
        Ok(())
    }

    fn deliver(&self, alert: &Alert) -> AgendaResult<()> {
        Notification::new()
            .summary(&alert.title)
            .body(&alert.body)
            .show()
            .map(|_| ())
            .map_err(|e| AgendaError::Notify(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "desktop"
    }
}

/// Pick the notification capability for this environment, once at startup.
///
/// Desktop notifications need a session bus or display server on Linux and
/// are always available on macOS and Windows; anything else falls back to
/// the terminal.
pub fn detect(force_terminal: bool) -> Arc<dyn AlertSink> {
    if force_terminal {
        return Arc::new(TerminalSink);
    }

    if cfg!(target_os = "linux") {
        let has_session = std::env::var_os("DBUS_SESSION_BUS_ADDRESS").is_some()
            || std::env::var_os("DISPLAY").is_some()
            || std::env::var_os("WAYLAND_DISPLAY").is_some();
        if !has_session {
            return Arc::new(TerminalSink);
        }
    }

    Arc::new(DesktopSink)
}
