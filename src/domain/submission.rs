//! Submission records and review statuses.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::SubmissionId;
use crate::error::FormatError;

/// One homework review record as returned by the review API.
///
/// `status` is kept as the raw wire string; it only becomes a
/// [`ReviewStatus`] when a notification is formatted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub status: String,
    #[serde(rename = "homework_name")]
    pub name: String,
}

impl Submission {
    pub fn new(
        id: impl Into<SubmissionId>,
        status: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            status: status.into(),
            name: name.into(),
        }
    }
}

/// Review outcome of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    pub const ALL: [ReviewStatus; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Localized verdict text shown to the student.
    #[must_use]
    pub const fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for ReviewStatus {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| FormatError::UnknownStatus(s.to_string()))
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw response body of the review API.
///
/// `homeworks` is left untyped so the response validator can tell a missing
/// field from a field of the wrong shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewPayload {
    #[serde(default)]
    pub homeworks: Option<serde_json::Value>,
    #[serde(default)]
    pub current_date: Option<i64>,
}
