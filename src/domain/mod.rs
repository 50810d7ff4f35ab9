//! Review-API agnostic domain types.

mod chat;
mod id;
mod last_seen;
mod submission;

pub use chat::ChatTarget;
pub use id::SubmissionId;
pub use last_seen::LastSeen;
pub use submission::{ReviewPayload, ReviewStatus, Submission};
