//! Response data models for the WakaTime API.

pub mod all_time_since_today;
pub mod commits;
pub mod durations;
pub mod editors;
pub mod goals;
pub mod meta;
pub mod nullable;

// Re-exports
pub use all_time_since_today::{AllTimeSinceToday, AllTimeSinceTodayData, AllTimeSinceTodayRange};
pub use commits::{
    Commit, CommitDetail, CommitProject, CommitRepository, Commits, CommitsGetOptions,
};
pub use durations::{Durations, DurationsData, DurationsGetOptions};
pub use editors::{Editors, EditorsData, EditorsGetOptions};
pub use goals::{
    Goal, GoalChartData, GoalData, GoalOwner, GoalRange, GoalSharedWith, GoalSubscriber, Goals,
};
pub use meta::{Meta, MetaData, MetaIpDescriptions, MetaIps};
pub use nullable::Nullable;
