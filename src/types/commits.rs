//! Commit-related data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Nullable;

/// Paginated commits of a project, `users/{user}/projects/{project}/commits`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commits {
    pub commits: Vec<CommitDetail>,
    /// Author filter the list was restricted to
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub author: Nullable<String>,
    pub branch: String,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub next_page: Nullable<i64>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub next_page_url: Nullable<String>,
    pub page: i64,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub prev_page: Nullable<i64>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub prev_page_url: Nullable<String>,
    pub project: CommitProject,
    /// Sync state of the repository, e.g. "ok" or "pending_update"
    pub status: String,
    pub total: i64,
    pub total_pages: i64,
}

/// A single commit, `users/{user}/projects/{project}/commits/{hash}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    pub branch: String,
    pub commit: CommitDetail,
    pub project: CommitProject,
    pub status: String,
}

/// Commit metadata with the coding time spent on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitDetail {
    pub author_avatar_url: String,
    pub author_date: DateTime<Utc>,
    pub author_email: String,
    pub author_html_url: String,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub author_id: Nullable<String>,
    pub author_name: String,
    pub author_url: String,
    pub author_username: String,
    pub branch: String,
    pub committer_avatar_url: String,
    pub committer_date: DateTime<Utc>,
    pub committer_email: String,
    pub committer_html_url: String,
    pub committer_name: String,
    pub committer_url: String,
    pub committer_username: String,
    pub created_at: DateTime<Utc>,
    pub hash: String,
    pub html_url: String,
    pub human_readable_date: String,
    pub human_readable_natural_date: String,
    pub human_readable_total: String,
    pub human_readable_total_with_seconds: String,
    pub id: String,
    pub is_author_found: bool,
    pub message: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    /// Time spent coding on this commit
    pub total_seconds: f64,
    pub truncated_hash: String,
    pub url: String,
}

/// WakaTime project a commit belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitProject {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub badge: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub color: Nullable<String>,
    pub created_at: DateTime<Utc>,
    pub has_public_url: bool,
    pub human_readable_last_heartbeat_at: String,
    pub id: String,
    pub last_heartbeat_at: DateTime<Utc>,
    pub name: String,
    pub repository: CommitRepository,
    pub url: String,
    pub urlencoded_name: String,
}

/// Remote repository linked to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitRepository {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub badge: Nullable<String>,
    pub created_at: DateTime<Utc>,
    pub default_branch: String,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub description: Nullable<String>,
    pub fork_count: i64,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub homepage: Nullable<String>,
    pub html_url: String,
    pub id: String,
    pub image_icon_url: String,
    pub is_fork: bool,
    pub is_private: bool,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub last_synced_at: Nullable<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub modified_at: Nullable<DateTime<Utc>>,
    pub name: String,
    /// Hosting provider, e.g. "github"
    pub provider: String,
    pub star_count: i64,
    pub url: String,
    pub urlencoded_name: String,
    pub wakatime_project_name: String,
    pub watch_count: i64,
}

/// Query options for listing commits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitsGetOptions {
    /// Only commits by this author's username
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Branch to list, defaults to the repository's default branch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
}
