//! Editor plugin data models.

use serde::{Deserialize, Serialize};

/// Response envelope for `editors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Editors {
    pub data: Vec<EditorsData>,
}

/// An editor WakaTime has a plugin for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorsData {
    pub id: String,
    pub name: String,
    /// Brand color as a hex string
    pub color: String,
    pub website: String,
    pub repository: String,
    /// Latest plugin version
    pub version: String,
    pub version_url: String,
    pub history_url: String,
    /// False for plugins that are not published yet
    pub released: bool,
}

/// Query options for listing editors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EditorsGetOptions {
    /// Include plugins that are not released yet
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub unreleased: bool,
}
