//! API metadata models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response envelope for `meta`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub data: MetaData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaData {
    pub ip_descriptions: MetaIpDescriptions,
    pub ips: MetaIps,
    pub last_modified_at: DateTime<Utc>,
}

/// Public IP addresses used by each part of WakaTime, useful for firewall
/// allow lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaIps {
    pub api: Vec<String>,
    pub website: Vec<String>,
    pub worker: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaIpDescriptions {
    pub api: String,
    pub website: String,
    pub worker: String,
}
