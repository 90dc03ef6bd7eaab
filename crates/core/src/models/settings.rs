use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Environment variable overriding [`Settings::api_url`].
pub const API_URL_ENV: &str = "TRANSACTIONS_API_URL";

/// Environment variable overriding [`Settings::timeout_secs`].
pub const TIMEOUT_ENV: &str = "TRANSACTIONS_TIMEOUT_SECS";

/// Connection settings for the transactions endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Full URL of the transactions endpoint (queried without parameters).
    pub api_url: String,

    /// Request timeout applied by the HTTP transport (native targets only).
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000/api/transactions".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Settings {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    /// Defaults, overridden by `TRANSACTIONS_API_URL` and
    /// `TRANSACTIONS_TIMEOUT_SECS` when set.
    pub fn from_env() -> Result<Self, CoreError> {
        let mut settings = Self::default();

        if let Ok(url) = std::env::var(API_URL_ENV) {
            settings.api_url = url;
        }

        if let Ok(raw) = std::env::var(TIMEOUT_ENV) {
            settings.timeout_secs = raw.trim().parse().map_err(|_| {
                CoreError::Config(format!("{TIMEOUT_ENV} must be a whole number of seconds, got '{raw}'"))
            })?;
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Like [`Settings::from_env`], after loading a `.env` file from the
    /// working directory (or a parent). Variables already set in the process
    /// take precedence; a missing `.env` file is not an error.
    pub fn from_dotenv() -> Result<Self, CoreError> {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)
            .map_err(|e| CoreError::Config(format!("Failed to parse settings: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        let url = self.api_url.trim();
        if url.is_empty() {
            return Err(CoreError::Config("API URL must not be empty".into()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(CoreError::Config(format!(
                "API URL must use http or https: {url}"
            )));
        }
        if self.timeout_secs == 0 {
            return Err(CoreError::Config("Timeout must be at least one second".into()));
        }
        Ok(())
    }
}
