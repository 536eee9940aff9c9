use crate::model::{Destination, InvalidDestination};
use thiserror::Error;
use tracing::info;
use url::Url;

pub const BOT_TOKEN_VAR: &str = "BOT_TOKEN";
pub const WEBAPP_URL_VAR: &str = "WEBAPP_URL";
pub const ADMIN_CHAT_ID_VAR: &str = "ADMIN_CHAT_ID";

/// Values shipped in sample `.env` files that mean "not filled in yet".
pub const BOT_TOKEN_PLACEHOLDER: &str = "YOUR_BOT_TOKEN_HERE";
pub const WEBAPP_URL_PLACEHOLDER: &str = "YOUR_WEBAPP_URL_HERE";
pub const ADMIN_CHAT_ID_PLACEHOLDER: &str = "YOUR_ADMIN_CHAT_ID";

/// Errors found while loading [`BotConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable '{0}'")]
    Missing(&'static str),

    #[error("Environment variable '{0}' still holds its placeholder value")]
    Placeholder(&'static str),

    #[error("Invalid WEBAPP_URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("WEBAPP_URL must use https, got '{0}'")]
    InsecureUrl(Url),

    #[error("Invalid ADMIN_CHAT_ID: {0}")]
    InvalidAdmin(#[from] InvalidDestination),
}

/// Startup configuration, built once and shared read-only.
#[derive(Clone)]
pub struct BotConfig {
    pub token: String,
    /// Catalog page opened by the `/start` button.
    pub webapp_url: Url,
    /// Where order summaries go; `None` when unconfigured.
    pub admin: Option<Destination>,
}

impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &"[REDACTED]")
            .field("webapp_url", &self.webapp_url.as_str())
            .field("admin", &self.admin)
            .finish()
    }
}

impl BotConfig {
    /// Loads the configuration from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;

        info!(
            webapp_url = %config.webapp_url,
            admin = ?config.admin.as_ref().map(ToString::to_string),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str, placeholder: &str| -> Result<String, ConfigError> {
            let value = lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))?;
            if value == placeholder {
                return Err(ConfigError::Placeholder(key));
            }
            Ok(value)
        };

        let token = required(BOT_TOKEN_VAR, BOT_TOKEN_PLACEHOLDER)?;

        let webapp_url = Url::parse(&required(WEBAPP_URL_VAR, WEBAPP_URL_PLACEHOLDER)?)?;
        if webapp_url.scheme() != "https" {
            return Err(ConfigError::InsecureUrl(webapp_url));
        }

        let admin = admin_destination(lookup(ADMIN_CHAT_ID_VAR).as_deref())?;

        Ok(Self {
            token,
            webapp_url,
            admin,
        })
    }
}

/// Unset, blank and placeholder values all mean "no admin".
pub fn admin_destination(raw: Option<&str>) -> Result<Option<Destination>, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") | Some(ADMIN_CHAT_ID_PLACEHOLDER) => Ok(None),
        Some(value) => Ok(Some(value.parse()?)),
    }
}
