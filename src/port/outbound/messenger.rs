//! Chat messaging port.

use async_trait::async_trait;

use crate::domain::ChatTarget;
use crate::error::MessengerError;

/// Delivers plain-text messages to a chat.
///
/// Errors are returned as-is; deciding whether a failed delivery matters is
/// left to the caller.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_message(&self, chat: &ChatTarget, text: &str) -> Result<(), MessengerError>;
}
