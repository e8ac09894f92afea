//! Typed client for the WakaTime REST API.
//!
//! Every call takes a [`Context`] that can cancel it or give it a deadline.
//! Responses decode into the structs in [`types`]; nullable fields use
//! [`Nullable`] so an explicit `null` can be told apart from a missing key.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use wakatime::{ClientConfig, Context, WakaTimeClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::default().with_api_key("waka_00000000")?;
//! let client = WakaTimeClient::new(config)?;
//!
//! let ctx = Context::with_timeout(Duration::from_secs(10));
//! let total = client.all_time_since_today().get(&ctx, "current", None).await?;
//! println!("{}", total.data.text);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod clients;
pub mod config;
pub mod context;
pub mod error;
pub mod transport;
pub mod types;

// Re-exports
pub use client::WakaTimeClient;
pub use clients::{
    AllTimeSinceTodayClient, CommitsClient, DurationsClient, EditorsClient, GoalsClient,
    MetaClient,
};
pub use config::{ClientConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, VERSION};
pub use context::{CancelHandle, Context, ContextError};
pub use error::Error;
pub use transport::{is_success_status, ApiResponse, HttpTransport};
pub use types::{
    AllTimeSinceToday, Commit, Commits, CommitsGetOptions, Durations, DurationsGetOptions,
    Editors, EditorsGetOptions, Goal, Goals, Meta, Nullable,
};
