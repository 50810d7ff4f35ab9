//! Review Notifier - forwards homework review status changes to Telegram.
//!
//! The process polls the homework status API on a fixed interval, compares
//! the newest submission against the last one it notified about and sends
//! a chat message when the submission or its status changes.
//!
//! # Modules
//!
//! - [`domain`] - Submissions, review statuses and the last-seen pair
//! - [`port`] - Traits for the review source and the messenger
//! - [`adapter`] - HTTP client for the review API, Telegram messenger
//! - [`app`] - Configuration, message formatting and the poll loop
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `telegram` - Enable the Telegram messenger (default; required by the binary)

pub mod adapter;
pub mod app;
pub mod domain;
pub mod error;
pub mod port;
