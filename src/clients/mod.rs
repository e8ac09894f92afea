//! Resource clients for the WakaTime API.

pub mod all_time_since_today;
pub mod commits;
pub mod durations;
pub mod editors;
pub mod goals;
pub mod meta;

// Re-exports
pub use all_time_since_today::AllTimeSinceTodayClient;
pub use commits::CommitsClient;
pub use durations::DurationsClient;
pub use editors::EditorsClient;
pub use goals::GoalsClient;
pub use meta::MetaClient;
