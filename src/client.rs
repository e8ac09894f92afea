//! WakaTime API client.
//!
//! Provides the primary interface for interacting with the WakaTime API.

use std::sync::Arc;

use tracing::debug;

use crate::clients::{
    AllTimeSinceTodayClient, CommitsClient, DurationsClient, EditorsClient, GoalsClient,
    MetaClient,
};
use crate::config::ClientConfig;
use crate::error::Error;
use crate::transport::HttpTransport;

/// Main client for interacting with the WakaTime API.
///
/// Aggregates all resource clients over one shared transport.
///
/// # Example
///
/// ```rust,ignore
/// use wakatime::{ClientConfig, Context, WakaTimeClient};
///
/// let config = ClientConfig::default().with_api_key("waka_...")?;
/// let client = WakaTimeClient::new(config)?;
///
/// let ctx = Context::background();
/// let goals = client.goals().get_all(&ctx, "current").await?;
/// ```
pub struct WakaTimeClient {
    transport: Arc<HttpTransport>,
    all_time_since_today: AllTimeSinceTodayClient,
    commits: CommitsClient,
    durations: DurationsClient,
    editors: EditorsClient,
    goals: GoalsClient,
    meta: MetaClient,
}

impl WakaTimeClient {
    /// Create a new client with its own HTTP connection pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::from_transport(transport))
    }

    /// Create a client on top of an existing `reqwest::Client`.
    ///
    /// The config's `timeout` is ignored; configure it on `client` instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn with_http_client(config: ClientConfig, client: reqwest::Client) -> Result<Self, Error> {
        let transport = HttpTransport::with_client(&config, client)?;
        Ok(Self::from_transport(transport))
    }

    /// Create a client from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `WAKATIME_API_KEY` - API key sent as basic auth (optional)
    /// * `WAKATIME_BASE_URL` - Base URL (optional, default: <https://wakatime.com/api/v1/>)
    /// * `WAKATIME_USER_AGENT` - User agent, empty to omit the header (optional)
    /// * `WAKATIME_TIMEOUT_SECS` - Request timeout in seconds (optional)
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, Error> {
        let config = ClientConfig::from_env().map_err(|e| Error::Configuration(e.to_string()))?;
        Self::new(config)
    }

    fn from_transport(transport: HttpTransport) -> Self {
        debug!(base_url = %transport.base_url(), "created WakaTime client");
        let transport = Arc::new(transport);

        Self {
            all_time_since_today: AllTimeSinceTodayClient::new(Arc::clone(&transport)),
            commits: CommitsClient::new(Arc::clone(&transport)),
            durations: DurationsClient::new(Arc::clone(&transport)),
            editors: EditorsClient::new(Arc::clone(&transport)),
            goals: GoalsClient::new(Arc::clone(&transport)),
            meta: MetaClient::new(Arc::clone(&transport)),
            transport,
        }
    }

    /// Get the underlying HTTP transport, for requests without a typed
    /// wrapper.
    #[must_use]
    pub fn transport(&self) -> &Arc<HttpTransport> {
        &self.transport
    }

    #[must_use]
    pub fn all_time_since_today(&self) -> &AllTimeSinceTodayClient {
        &self.all_time_since_today
    }

    #[must_use]
    pub fn commits(&self) -> &CommitsClient {
        &self.commits
    }

    #[must_use]
    pub fn durations(&self) -> &DurationsClient {
        &self.durations
    }

    #[must_use]
    pub fn editors(&self) -> &EditorsClient {
        &self.editors
    }

    #[must_use]
    pub fn goals(&self) -> &GoalsClient {
        &self.goals
    }

    #[must_use]
    pub fn meta(&self) -> &MetaClient {
        &self.meta
    }
}
