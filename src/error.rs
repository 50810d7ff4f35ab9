use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable: {name}")]
    MissingVar { name: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors from fetching the submission list.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid from_date {0}: must be non-negative")]
    InvalidTimestamp(i64),

    #[error("request to review API failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("review API responded {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode review API response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

/// Errors from checking the shape of a fetched payload.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("response has no '{field}' field")]
    MissingField { field: &'static str },

    #[error("'homeworks' is not a list: {found}")]
    NotAList { found: String },

    #[error("malformed newest submission: {0}")]
    MalformedSubmission(#[source] serde_json::Error),
}

/// Errors from turning a submission into a notification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("unknown review status '{0}'")]
    UnknownStatus(String),
}

/// Errors from the messaging backend.
#[derive(Error, Debug)]
pub enum MessengerError {
    #[error("failed to send message: {0}")]
    Send(String),

    #[error("invalid chat target '{0}'")]
    InvalidChat(String),
}

/// Everything that can abort a single polling iteration.
#[derive(Error, Debug)]
pub enum PollError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("response contains no submissions")]
    NoSubmissions,
}
