//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │     Poller (app)        │
//!     ┌──────────────┤                         ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                                                       ▼
//! ┌──────────────┐                                    ┌───────────┐
//! │ ReviewSource │                                    │ Messenger │
//! │   Adapter    │                                    │  Adapter  │
//! └──────────────┘                                    └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`ReviewSource`] - Submission status feed (the review HTTP API)
//! - [`Messenger`] - Chat message delivery (Telegram)

pub mod outbound;

pub use outbound::messenger::Messenger;
pub use outbound::review::ReviewSource;
