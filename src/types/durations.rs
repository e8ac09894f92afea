//! Duration data models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Nullable;

/// Coding sessions of one day, `users/{user}/durations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Durations {
    pub data: Vec<DurationsData>,
    pub branches: Vec<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub timezone: String,
}

/// One continuous coding session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationsData {
    /// Project name, or the value of the `slice_by` dimension
    pub project: String,
    /// Start of the session as a UNIX timestamp
    pub time: f64,
    /// Length of the session in seconds
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub color: Nullable<String>,
}

/// Query options for fetching durations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DurationsGetOptions {
    /// Day to fetch; the server defaults to today
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Comma separated branch names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branches: Option<String>,
    /// Keystroke timeout in minutes joining heartbeats into one duration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writes_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Group by a dimension other than project, e.g. "language"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slice_by: Option<String>,
}
