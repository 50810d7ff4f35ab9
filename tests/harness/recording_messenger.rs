use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use review_notifier::domain::ChatTarget;
use review_notifier::error::MessengerError;
use review_notifier::port::Messenger;

/// Thread-safe message collector for notification assertions in tests.
///
/// Every attempt is recorded, including ones made while `fail` is set.
#[derive(Clone, Default)]
pub struct RecordingMessenger {
    sent: Arc<Mutex<Vec<(ChatTarget, String)>>>,
    fail: Arc<AtomicBool>,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent
            .lock()
            .expect("lock sent messages")
            .iter()
            .map(|(_, text)| text.clone())
            .collect()
    }

    pub fn chats(&self) -> Vec<ChatTarget> {
        self.sent
            .lock()
            .expect("lock sent messages")
            .iter()
            .map(|(chat, _)| chat.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sent.lock().expect("lock sent messages").len()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_message(&self, chat: &ChatTarget, text: &str) -> Result<(), MessengerError> {
        self.sent
            .lock()
            .expect("lock sent messages")
            .push((chat.clone(), text.to_string()));

        if self.fail.load(Ordering::SeqCst) {
            Err(MessengerError::Send("scripted failure".into()))
        } else {
            Ok(())
        }
    }
}
