//! Client configuration.
//!
//! # Design
//! Two compatibility switches reproduce older wire behavior bit-for-bit:
//! `legacy_swallow_errors` resolves unexplained failures with `null` instead
//! of an error, and `legacy_raw_query` writes query strings without encoding
//! or null omission. Both default to off.

use serde::Deserialize;

use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    pub token: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub legacy_swallow_errors: bool,
    #[serde(default)]
    pub legacy_raw_query: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl ClientConfig {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            base_url: default_base_url(),
            legacy_swallow_errors: false,
            legacy_raw_query: false,
        }
    }

    /// Read `BOT_TOKEN` (required), `BOT_API_URL`, `BOT_LEGACY_SWALLOW_ERRORS`
    /// and `BOT_LEGACY_RAW_QUERY` from the environment.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let token = lookup("BOT_TOKEN")
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Config("BOT_TOKEN is not set".to_string()))?;
        let mut config = Self::new(&token);
        if let Some(url) = lookup("BOT_API_URL") {
            config.base_url = url;
        }
        if let Some(raw) = lookup("BOT_LEGACY_SWALLOW_ERRORS") {
            config.legacy_swallow_errors = parse_flag("BOT_LEGACY_SWALLOW_ERRORS", &raw)?;
        }
        if let Some(raw) = lookup("BOT_LEGACY_RAW_QUERY") {
            config.legacy_raw_query = parse_flag("BOT_LEGACY_RAW_QUERY", &raw)?;
        }
        Ok(config)
    }

    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn legacy_swallow_errors(mut self, enabled: bool) -> Self {
        self.legacy_swallow_errors = enabled;
        self
    }

    pub fn legacy_raw_query(mut self, enabled: bool) -> Self {
        self.legacy_raw_query = enabled;
        self
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"***")
            .field("base_url", &self.base_url)
            .field("legacy_swallow_errors", &self.legacy_swallow_errors)
            .field("legacy_raw_query", &self.legacy_raw_query)
            .finish()
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, ApiError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ApiError::Config(format!("{key}: expected a boolean, got {other:?}"))),
    }
}
