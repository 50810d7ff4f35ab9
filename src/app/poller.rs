//! The polling loop.
//!
//! Each tick fetches the submission list, looks at the newest entry only and
//! notifies the chat when its `(id, status)` differs from the last one
//! notified. Every failure inside a tick is reported to the chat on a
//! best-effort basis and the loop carries on after the poll interval.

use chrono::Utc;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use super::config::{CursorMode, PollConfig};
use super::format::{check_response, failure_message, latest, parse_status};
use crate::domain::{ChatTarget, LastSeen};
use crate::error::PollError;
use crate::port::{Messenger, ReviewSource};

/// Result of a single poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The newest submission changed and a notification was attempted.
    Notified { delivered: bool },
    /// The newest submission matches the last notified one.
    Unchanged,
    /// The poll failed; `reported` tells whether the failure notice got out.
    Failed { reported: bool },
}

/// Send `text` to `chat`, logging the result.
///
/// Never fails: delivery errors are logged and swallowed. Returns whether
/// the message was delivered.
pub async fn send_notification<M>(messenger: &M, chat: &ChatTarget, text: &str) -> bool
where
    M: Messenger + ?Sized,
{
    match messenger.send_message(chat, text).await {
        Ok(()) => {
            info!(chat = %chat, message = %text, "Notification sent");
            true
        }
        Err(e) => {
            error!(chat = %chat, error = %e, "Failed to send notification");
            false
        }
    }
}

/// Polls a [`ReviewSource`] and forwards status changes to a [`Messenger`].
///
/// Owns the only mutable state of the process: the last notified pair and
/// the rolling cursor. Neither survives a restart.
pub struct Poller<R, M> {
    source: R,
    messenger: M,
    chat: ChatTarget,
    config: PollConfig,
    last_seen: LastSeen,
    cursor: i64,
}

impl<R, M> Poller<R, M>
where
    R: ReviewSource,
    M: Messenger,
{
    pub fn new(source: R, messenger: M, chat: ChatTarget, config: PollConfig) -> Self {
        Self {
            source,
            messenger,
            chat,
            config,
            last_seen: LastSeen::new(),
            cursor: Utc::now().timestamp(),
        }
    }

    #[must_use]
    pub fn last_seen(&self) -> &LastSeen {
        &self.last_seen
    }

    /// Server-supplied cursor from the last successful poll.
    #[must_use]
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    fn from_date(&self) -> i64 {
        match self.config.cursor {
            CursorMode::Fixed => self.config.fixed_from_date,
            CursorMode::Rolling => self.cursor,
        }
    }

    /// Run one poll.
    pub async fn tick(&mut self) -> TickOutcome {
        let from_date = self.from_date();

        match self.poll(from_date).await {
            Ok(outcome) => outcome,
            Err(err) => {
                let message = failure_message(&err);
                error!(error = %err, from_date, "Poll failed");
                let reported = send_notification(&self.messenger, &self.chat, &message).await;
                TickOutcome::Failed { reported }
            }
        }
    }

    async fn poll(&mut self, from_date: i64) -> Result<TickOutcome, PollError> {
        let payload = self.source.fetch(from_date).await?;
        let items = check_response(&payload)?;
        let submission = latest(items).ok_or(PollError::NoSubmissions)??;

        let outcome = if self.last_seen.is_unchanged(&submission) {
            debug!(
                id = %submission.id,
                status = %submission.status,
                "No new statuses in response"
            );
            TickOutcome::Unchanged
        } else {
            let message = parse_status(&submission)?;
            let delivered = send_notification(&self.messenger, &self.chat, &message).await;
            // Recorded even when delivery failed: each change is attempted once.
            self.last_seen.record(&submission);
            TickOutcome::Notified { delivered }
        };

        match payload.current_date {
            Some(current_date) if current_date >= 0 => self.cursor = current_date,
            Some(current_date) => {
                warn!(current_date, "Ignoring negative cursor from review API");
            }
            None => debug!("Response carries no current_date"),
        }

        Ok(outcome)
    }

    /// Poll forever, sleeping the configured interval after every tick.
    pub async fn run(mut self) {
        info!(
            chat = %self.chat,
            interval_secs = self.config.interval_secs,
            cursor = ?self.config.cursor,
            "Review notifier started"
        );

        loop {
            let outcome = self.tick().await;
            debug!(?outcome, "Poll finished");
            sleep(self.config.interval()).await;
        }
    }
}
