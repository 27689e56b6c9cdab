//! Core types for the agenda tools.
//!
//! This crate provides the pieces shared by the `agenda` CLI and the
//! `agenda-notify` daemon:
//! - `Event` and the durable `EventStore`
//! - `ReminderScheduler` and the `AlertSink` delivery seam
//! - configuration and error types

pub mod config;
pub mod error;
pub mod event;
pub mod notify;
pub mod reminder;
pub mod store;

pub use error::{AgendaError, AgendaResult};
pub use event::Event;
pub use reminder::ReminderScheduler;
pub use store::EventStore;
