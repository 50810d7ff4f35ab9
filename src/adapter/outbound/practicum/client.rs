//! HTTP client for the homework status endpoint.
//!
//! One request per poll: `GET <endpoint>?from_date=<epoch>` authenticated
//! with an OAuth token header. Retrying is the caller's business; a failed
//! request is reported once and the poll loop tries again next cycle.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};
use url::Url;

use crate::domain::ReviewPayload;
use crate::error::FetchError;
use crate::port::ReviewSource;

/// Review API client.
pub struct PracticumClient {
    http: HttpClient,
    endpoint: Url,
    token: String,
}

impl PracticumClient {
    /// Create a client without a request timeout.
    #[must_use]
    pub fn new(endpoint: Url, token: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            endpoint,
            token: token.into(),
        }
    }

    /// Create a client with an optional overall request timeout.
    #[must_use]
    pub fn with_timeout(endpoint: Url, token: impl Into<String>, timeout: Option<Duration>) -> Self {
        let Some(timeout) = timeout else {
            return Self::new(endpoint, token);
        };

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            endpoint,
            token: token.into(),
        }
    }
}

#[async_trait]
impl ReviewSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<ReviewPayload, FetchError> {
        if from_date < 0 {
            return Err(FetchError::InvalidTimestamp(from_date));
        }

        debug!(endpoint = %self.endpoint, from_date, "Fetching homework statuses");

        let response = self
            .http
            .get(self.endpoint.clone())
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        response.json::<ReviewPayload>().await.map_err(FetchError::Decode)
    }
}
