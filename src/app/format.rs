//! Response validation and notification text.

use std::fmt::Display;

use serde::Deserialize;

use crate::domain::{ReviewPayload, ReviewStatus, Submission};
use crate::error::{FormatError, ValidationError};

/// Check that the payload carries a list of submissions.
///
/// Entries are returned undecoded; only the one [`latest`] picks is ever
/// read. An empty list is valid here.
pub fn check_response(payload: &ReviewPayload) -> Result<&[serde_json::Value], ValidationError> {
    let homeworks = payload
        .homeworks
        .as_ref()
        .ok_or(ValidationError::MissingField { field: "homeworks" })?;

    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ValidationError::NotAList {
            found: json_kind(homeworks).to_string(),
        })
}

/// Decode the newest submission. The API lists newest first.
///
/// `None` when the list is empty.
#[must_use]
pub fn latest(items: &[serde_json::Value]) -> Option<Result<Submission, ValidationError>> {
    items.first().map(|item| {
        Submission::deserialize(item).map_err(ValidationError::MalformedSubmission)
    })
}

/// Notification text for a status change.
pub fn parse_status(submission: &Submission) -> Result<String, FormatError> {
    let status: ReviewStatus = submission.status.parse()?;
    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        submission.name,
        status.verdict()
    ))
}

/// Notification text for a failed poll.
pub fn failure_message(error: &dyn Display) -> String {
    format!("Сбой в работе программы: {error}")
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
