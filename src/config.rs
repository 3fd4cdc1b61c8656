use thiserror::Error;

use crate::locale::{AppLabels, AppLanguage};

/// Configuration failures that must abort the run before any test starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVariable(&'static str),

    #[error("application language is not supported: {0}")]
    UnsupportedLanguage(String),

    #[error("no label table for locale {0}")]
    MissingLabelTable(&'static str),

    #[error("failed to parse label fixture: {0}")]
    LabelFixture(#[from] serde_json::Error),
}

/// Admin credentials and the resolved label set, read once at startup.
pub struct Environment {
    pub username: String,
    pub password: String,
    pub language: AppLanguage,
    pub labels: AppLabels,
}

impl Environment {
    /// Read `ADMIN_USERNAME`, `ADMIN_PASSWORD` and `APP_LANGUAGE` and resolve
    /// the label table. Any missing variable or unsupported language is fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        let username = require_var("ADMIN_USERNAME")?;
        let password = require_var("ADMIN_PASSWORD")?;
        let language: AppLanguage = require_var("APP_LANGUAGE")?.parse()?;
        let labels = crate::locale::labels_for(language)?;

        Ok(Self {
            username,
            password,
            language,
            labels,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVariable(name)),
    }
}

/// Run configuration
pub struct RunConfig {
    /// Per-test timeout (ms)
    pub test_timeout_ms: u64,

    /// How many times a failed test is re-executed in full
    pub retries: u32,

    /// Worker count. Fixed to one: tests share the remote room list and
    /// must not interleave.
    pub workers: u32,

    /// Parallel execution flag, kept disabled for the same reason.
    pub fully_parallel: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            test_timeout_ms: 30_000,
            retries: 1,
            workers: 1,
            fully_parallel: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_config_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.test_timeout_ms, 30_000);
        assert_eq!(config.retries, 1);
        assert_eq!(config.workers, 1);
        assert!(!config.fully_parallel);
    }

    #[test]
    fn unsupported_language_is_typed() {
        let err = "french".parse::<AppLanguage>().unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedLanguage(_)));
    }
}
