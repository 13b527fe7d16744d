use std::num::ParseIntError;
use std::time::Duration;

pub const REVEAL_DELAY_ENV: &str = "RADICAL_QUIZ_REVEAL_MS";
pub const SEED_ENV: &str = "RADICAL_QUIZ_SEED";

/// Default length of the reveal window, in milliseconds.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 2000;

/// Host-tunable session settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// How long the answer stays revealed before the next radical is drawn.
    pub reveal_delay_ms: u64,
    /// Fixed seed for reproducible sessions. Entropy is used when absent.
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            seed: None,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got {value:?}: {source}")]
    InvalidNumber {
        key: &'static str,
        value: String,
        source: ParseIntError,
    },
    #[error("failed to parse quiz configuration: {message}")]
    ParseError { message: String },
}

impl QuizConfig {
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads overrides through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(REVEAL_DELAY_ENV) {
            config.reveal_delay_ms = parse_number(REVEAL_DELAY_ENV, &value)?;
        }

        if let Some(value) = lookup(SEED_ENV) {
            config.seed = Some(parse_number(SEED_ENV, &value)?);
        }

        Ok(config)
    }

    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(data).map_err(|error| ConfigError::ParseError {
            message: error.to_string(),
        })
    }
}

fn parse_number(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidNumber {
            key,
            value: value.to_string(),
            source,
        })
}
