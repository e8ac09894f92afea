//! Client configuration.
//!
//! A [`ClientConfig`] is read once when the client is built and never changes
//! afterwards.

use std::env;
use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

/// Crate version, sent as part of the default user agent.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default base URL for the WakaTime API.
pub const DEFAULT_BASE_URL: &str = "https://wakatime.com/api/v1/";

/// Default `User-Agent` header value.
pub const DEFAULT_USER_AGENT: &str = concat!("wakatime-rs/", env!("CARGO_PKG_VERSION"));

/// Immutable settings shared by every request a client makes.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every request path is joined onto.
    pub base_url: String,
    /// `User-Agent` header value. An empty string omits the header entirely.
    pub user_agent: String,
    /// Headers applied to every request, e.g. `Authorization`.
    pub default_headers: Option<HeaderMap>,
    /// Whole-request timeout applied by the HTTP client.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_headers: None,
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Add `Authorization: Basic <base64(api_key)>` to the default headers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiKey`] for an empty key.
    pub fn with_api_key(mut self, api_key: &str) -> Result<Self, ConfigError> {
        if api_key.is_empty() {
            return Err(ConfigError::InvalidApiKey("key is empty"));
        }
        let encoded = BASE64.encode(api_key);
        let mut value = HeaderValue::from_str(&format!("Basic {encoded}"))
            .map_err(|_| ConfigError::InvalidApiKey("not a valid header value"))?;
        value.set_sensitive(true);

        self.default_headers
            .get_or_insert_with(HeaderMap::new)
            .insert(AUTHORIZATION, value);
        Ok(self)
    }

    /// Load configuration from environment variables.
    ///
    /// * `WAKATIME_BASE_URL` - API base URL (default: <https://wakatime.com/api/v1/>)
    /// * `WAKATIME_USER_AGENT` - user agent; set it empty to send none
    /// * `WAKATIME_API_KEY` - API key sent as HTTP basic auth
    /// * `WAKATIME_TIMEOUT_SECS` - request timeout in seconds
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(base_url) = env::var("WAKATIME_BASE_URL") {
            if base_url.is_empty() {
                return Err(ConfigError::InvalidValue("WAKATIME_BASE_URL"));
            }
            config.base_url = base_url;
        }

        if let Ok(user_agent) = env::var("WAKATIME_USER_AGENT") {
            config.user_agent = user_agent;
        }

        if let Ok(secs) = env::var("WAKATIME_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .map_err(|_| ConfigError::InvalidValue("WAKATIME_TIMEOUT_SECS"))?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        match env::var("WAKATIME_API_KEY") {
            Ok(key) if !key.is_empty() => config
                .with_api_key(&key)
                .map_err(|_| ConfigError::InvalidValue("WAKATIME_API_KEY")),
            _ => Ok(config),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),

    #[error("Invalid API key: {0}")]
    InvalidApiKey(&'static str),
}
