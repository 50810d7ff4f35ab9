use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use review_notifier::domain::ReviewPayload;
use review_notifier::error::FetchError;
use review_notifier::port::ReviewSource;
use serde_json::Value;

/// Review source that replays queued responses in order.
///
/// Running out of responses yields a fetch error, like an unreachable API.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    responses: Arc<Mutex<VecDeque<Result<ReviewPayload, FetchError>>>>,
    requests: Arc<Mutex<Vec<i64>>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw JSON body as the next response.
    pub fn push_json(&self, body: Value) -> &Self {
        let payload: ReviewPayload = serde_json::from_value(body).expect("valid payload json");
        self.responses
            .lock()
            .expect("lock responses")
            .push_back(Ok(payload));
        self
    }

    /// Queue a single-submission response.
    pub fn push_submission(&self, id: i64, status: &str, name: &str, current_date: i64) -> &Self {
        self.push_json(serde_json::json!({
            "homeworks": [{"id": id, "status": status, "homework_name": name}],
            "current_date": current_date,
        }))
    }

    pub fn push_error(&self, message: &str) -> &Self {
        self.responses
            .lock()
            .expect("lock responses")
            .push_back(Err(FetchError::Other(message.to_string())));
        self
    }

    /// `from_date` of every fetch made so far.
    pub fn requests(&self) -> Vec<i64> {
        self.requests.lock().expect("lock requests").clone()
    }
}

#[async_trait]
impl ReviewSource for ScriptedSource {
    async fn fetch(&self, from_date: i64) -> Result<ReviewPayload, FetchError> {
        if from_date < 0 {
            return Err(FetchError::InvalidTimestamp(from_date));
        }
        self.requests.lock().expect("lock requests").push(from_date);
        self.responses
            .lock()
            .expect("lock responses")
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Other("no scripted response".into())))
    }
}
