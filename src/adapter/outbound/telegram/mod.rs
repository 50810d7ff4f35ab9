//! Telegram delivery for review notifications.
//!
//! Requires the `telegram` feature to be enabled.

mod messenger;

pub use messenger::TelegramMessenger;
