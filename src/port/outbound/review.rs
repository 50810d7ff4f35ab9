//! Review status source port.

use async_trait::async_trait;

use crate::domain::ReviewPayload;
use crate::error::FetchError;

/// Source of submission review statuses.
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Fetch the submission list updated since `from_date` (epoch seconds).
    ///
    /// Implementations reject a negative `from_date` without doing any I/O.
    async fn fetch(&self, from_date: i64) -> Result<ReviewPayload, FetchError>;
}
