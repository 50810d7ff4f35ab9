use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::Recipient;

use crate::domain::ChatTarget;
use crate::error::MessengerError;
use crate::port::Messenger;

/// Sends plain-text messages through the Telegram Bot API.
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    /// Create a messenger for the bot identified by `token`.
    #[must_use]
    pub fn new(token: &str) -> Self {
        Self {
            bot: Bot::new(token),
        }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_message(&self, chat: &ChatTarget, text: &str) -> Result<(), MessengerError> {
        self.bot
            .send_message(recipient(chat)?, text)
            .await
            .map(|_| ())
            .map_err(|e| MessengerError::Send(e.to_string()))
    }
}

/// Numeric ids address a chat directly; `@name` addresses a public channel.
fn recipient(chat: &ChatTarget) -> Result<Recipient, MessengerError> {
    if let Some(id) = chat.numeric_id() {
        return Ok(Recipient::Id(ChatId(id)));
    }

    let name = chat.as_str().trim();
    if name.len() > 1 && name.starts_with('@') {
        Ok(Recipient::ChannelUsername(name.to_string()))
    } else {
        Err(MessengerError::InvalidChat(chat.to_string()))
    }
}
