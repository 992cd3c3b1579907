//! Console configuration from environment variables
//!
//! | Variable                 | Default                     |
//! |--------------------------|-----------------------------|
//! | `CONSOLE_API_URL`        | `http://localhost:8000/api` |
//! | `CONSOLE_LOG_DIR`        | `logs`                      |
//! | `RUST_LOG`               | `console=info,warn`         |
//! | `CONSOLE_ADMIN_EMAIL`    | unset                       |
//! | `CONSOLE_ADMIN_PASSWORD` | unset                       |
//!
//! `.env` files are read by the binary (via `dotenvy`) before this runs.

use std::env;
use std::path::PathBuf;

use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_LOG_LEVEL: &str = "console=info,warn";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),

    #[error("{0} is set but {1} is missing")]
    Incomplete(String, String),
}

#[derive(Clone, Debug)]
pub struct ConsoleConfig {
    /// Storefront API root, including the `/api` prefix
    pub api_base_url: String,
    pub log_dir: PathBuf,
    /// EnvFilter directive
    pub log_level: String,
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            admin_email: None,
            admin_password: None,
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_base_url = non_empty("CONSOLE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let config = Self {
            api_base_url: api_base_url.trim().trim_end_matches('/').to_string(),
            log_dir: non_empty("CONSOLE_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("logs")),
            log_level: non_empty("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            admin_email: non_empty("CONSOLE_ADMIN_EMAIL"),
            admin_password: non_empty("CONSOLE_ADMIN_PASSWORD"),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api_base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("CONSOLE_API_URL".to_string(), e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEnvVar(
                "CONSOLE_API_URL".to_string(),
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        match (&self.admin_email, &self.admin_password) {
            (Some(_), None) => Err(ConfigError::Incomplete(
                "CONSOLE_ADMIN_EMAIL".to_string(),
                "CONSOLE_ADMIN_PASSWORD".to_string(),
            )),
            (None, Some(_)) => Err(ConfigError::Incomplete(
                "CONSOLE_ADMIN_PASSWORD".to_string(),
                "CONSOLE_ADMIN_EMAIL".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Admin credentials for unattended login, when both are configured
    pub fn admin_credentials(&self) -> Option<(&str, &str)> {
        match (&self.admin_email, &self.admin_password) {
            (Some(email), Some(password)) => Some((email.as_str(), password.as_str())),
            _ => None,
        }
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug")
    }
}
