use super::{Submission, SubmissionId};

/// Identity and status of the most recently notified submission.
///
/// Starts out empty, so the first observed submission always counts as a
/// change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastSeen {
    entry: Option<(SubmissionId, String)>,
}

impl LastSeen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `submission` has the same id and status as the stored pair.
    #[must_use]
    pub fn is_unchanged(&self, submission: &Submission) -> bool {
        matches!(
            &self.entry,
            Some((id, status)) if *id == submission.id && *status == submission.status
        )
    }

    pub fn record(&mut self, submission: &Submission) {
        self.entry = Some((submission.id.clone(), submission.status.clone()));
    }

    #[must_use]
    pub fn id(&self) -> Option<&SubmissionId> {
        self.entry.as_ref().map(|(id, _)| id)
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.entry.as_ref().map(|(_, status)| status.as_str())
    }
}
