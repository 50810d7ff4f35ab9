//! Outbound adapters: the review HTTP API and the Telegram bot.

pub mod practicum;

#[cfg(feature = "telegram")]
pub mod telegram;
