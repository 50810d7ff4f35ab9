//! Application layer: configuration, notification text and the poll loop.

pub mod config;
pub mod format;
pub mod poller;

pub use config::{Credentials, CursorMode, PollConfig, Settings};
pub use poller::{send_notification, Poller, TickOutcome};
