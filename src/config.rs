//! Harness configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CSRF_TOKEN: &str = "harness-csrf";
pub const DEFAULT_STATIC_DIR: &str = "harness/static";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("HARNESS_CSRF_TOKEN must not be empty")]
    EmptyCsrfToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub port: u16,
    /// Value the status-change endpoint expects in `X-CSRFToken`.
    pub csrf_token: String,
    /// Demo page and built widget bundle.
    pub static_dir: PathBuf,
    /// JSON fixture file; built-in sample data when absent.
    pub fixtures_path: Option<PathBuf>,
}

impl HarnessConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `HARNESS_CSRF_TOKEN`: default `harness-csrf`
    /// - `HARNESS_STATIC_DIR`: default `harness/static`
    /// - `HARNESS_FIXTURES`: path to a fixture JSON file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unparsable port or an empty token.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HarnessConfig::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`HarnessConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let csrf_token = lookup("HARNESS_CSRF_TOKEN").unwrap_or_else(|| DEFAULT_CSRF_TOKEN.to_owned());
        if csrf_token.trim().is_empty() {
            return Err(ConfigError::EmptyCsrfToken);
        }
        let static_dir = lookup("HARNESS_STATIC_DIR").map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from);
        let fixtures_path = lookup("HARNESS_FIXTURES").filter(|p| !p.trim().is_empty()).map(PathBuf::from);

        Ok(Self { port, csrf_token, static_dir, fixtures_path })
    }
}
