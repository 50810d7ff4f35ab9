//! Configuration: non-secret settings from TOML, secrets from the environment.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use crate::domain::ChatTarget;
use crate::error::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Environment variable that overrides the settings file location.
pub const CONFIG_PATH_VAR: &str = "REVIEW_NOTIFIER_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

pub const PRACTICUM_TOKEN_VAR: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// Non-secret runtime settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiConfig,
    pub poll: PollConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub endpoint: String,
    /// Request timeout; unset means requests may block indefinitely.
    pub timeout_secs: Option<u64>,
}

/// Which `from_date` each poll requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorMode {
    /// Always request from `fixed_from_date`, re-reading the full history.
    #[default]
    Fixed,
    /// Request from the `current_date` the server returned last time.
    Rolling,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    pub interval_secs: u64,
    pub cursor: CursorMode,
    pub fixed_from_date: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.endpoint).map_err(|e| ConfigError::InvalidValue {
            field: "endpoint",
            reason: e.to_string(),
        })
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: 600,
            cursor: CursorMode::Fixed,
            fixed_from_date: 1,
        }
    }
}

impl PollConfig {
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".into(),
            format: "pretty".into(),
        }
    }
}

impl LoggingConfig {
    /// Initialize the tracing subscriber on stdout.
    ///
    /// Each line carries timestamp, level, target and message; the target
    /// is the emitting module path (`review_notifier::app::poller`), which
    /// serves as the logger name. `RUST_LOG` takes precedence over the
    /// configured level.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).with_target(true).init();
            }
            _ => {
                fmt().with_env_filter(filter).with_target(true).init();
            }
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::from_toml(&content)
    }

    /// Load settings from `path` if it exists, otherwise use defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Settings file path: `REVIEW_NOTIFIER_CONFIG` or `config.toml`.
    #[must_use]
    pub fn default_path() -> String {
        std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into())
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content).map_err(ConfigError::Parse)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.api.endpoint_url()?;
        if self.api.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than zero".into(),
            });
        }
        if self.poll.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "interval_secs",
                reason: "must be greater than zero".into(),
            });
        }
        if self.poll.fixed_from_date < 0 {
            return Err(ConfigError::InvalidValue {
                field: "fixed_from_date",
                reason: format!("{} is negative", self.poll.fixed_from_date),
            });
        }
        Ok(())
    }
}

/// The three required secrets.
#[derive(Clone)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub chat: ChatTarget,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("chat", &self.chat)
            .finish()
    }
}

impl Credentials {
    /// Read credentials from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through `lookup`; empty values count as missing.
    ///
    /// Variables are checked in a fixed order and the first missing one is
    /// reported.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingVar { name })
        };

        Ok(Self {
            practicum_token: require(PRACTICUM_TOKEN_VAR)?,
            telegram_token: require(TELEGRAM_TOKEN_VAR)?,
            chat: ChatTarget::new(require(TELEGRAM_CHAT_ID_VAR)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults_match_review_api() {
        let settings = Settings::default();
        assert_eq!(settings.api.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.poll.interval(), Duration::from_secs(600));
        assert_eq!(settings.poll.cursor, CursorMode::Fixed);
        assert_eq!(settings.poll.fixed_from_date, 1);
        assert!(settings.api.timeout().is_none());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let settings = Settings::from_toml(
            r#"
[poll]
interval_secs = 30
cursor = "rolling"
"#,
        )
        .unwrap();

        assert_eq!(settings.poll.interval_secs, 30);
        assert_eq!(settings.poll.cursor, CursorMode::Rolling);
        assert_eq!(settings.api.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.logging.level, "debug");
    }

    #[test]
    fn rejects_zero_interval() {
        let result = Settings::from_toml("[poll]\ninterval_secs = 0\n");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                field: "interval_secs",
                ..
            })
        ));
    }

    #[test]
    fn rejects_bad_endpoint() {
        let result = Settings::from_toml("[api]\nendpoint = \"not a url\"\n");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                field: "endpoint",
                ..
            })
        ));
    }

    #[test]
    fn credentials_require_all_three() {
        let vars = env(&[
            (PRACTICUM_TOKEN_VAR, "p"),
            (TELEGRAM_TOKEN_VAR, "t"),
            (TELEGRAM_CHAT_ID_VAR, "42"),
        ]);
        let creds = Credentials::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(creds.practicum_token, "p");
        assert_eq!(creds.chat, ChatTarget::new("42"));

        for missing in [PRACTICUM_TOKEN_VAR, TELEGRAM_TOKEN_VAR, TELEGRAM_CHAT_ID_VAR] {
            let mut partial = vars.clone();
            partial.remove(missing);
            match Credentials::from_lookup(|k| partial.get(k).cloned()) {
                Err(ConfigError::MissingVar { name }) => assert_eq!(name, missing),
                other => panic!("expected {missing} to be reported, got {other:?}"),
            }
        }
    }

    #[test]
    fn blank_credential_counts_as_missing() {
        let vars = env(&[
            (PRACTICUM_TOKEN_VAR, "p"),
            (TELEGRAM_TOKEN_VAR, "  "),
            (TELEGRAM_CHAT_ID_VAR, "42"),
        ]);
        assert!(matches!(
            Credentials::from_lookup(|k| vars.get(k).cloned()),
            Err(ConfigError::MissingVar {
                name: TELEGRAM_TOKEN_VAR
            })
        ));
    }

    #[test]
    fn debug_output_hides_tokens() {
        let creds = Credentials {
            practicum_token: "very-secret".into(),
            telegram_token: "also-secret".into(),
            chat: ChatTarget::new("1"),
        };
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("secret"));
    }
}
