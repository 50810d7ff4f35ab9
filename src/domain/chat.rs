use std::fmt;

/// Destination chat for notifications.
///
/// Either a numeric chat id or a public `@channel` username; the messaging
/// adapter decides how to address it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChatTarget(String);

impl ChatTarget {
    pub fn new(target: impl Into<String>) -> Self {
        Self(target.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric chat id, if the target is one.
    #[must_use]
    pub fn numeric_id(&self) -> Option<i64> {
        self.0.trim().parse().ok()
    }
}

impl fmt::Display for ChatTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
