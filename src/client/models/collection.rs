//! Collection models
//!
//! Collections are named groupings of hosts, images, clusters and so on.
//! Policy rules reference them by name.

use serde::{Deserialize, Serialize};

use super::is_false;

/// Collection as returned by `GET /api/v1/collections`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub color: String,

    #[serde(default, rename = "accountIDs", skip_serializing_if = "Vec::is_empty")]
    pub account_ids: Vec<String>,

    #[serde(default, rename = "appIDs", skip_serializing_if = "Vec::is_empty")]
    pub app_ids: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clusters: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code_repos: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub containers: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hosts: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub namespaces: Vec<String>,

    /// Built-in collection (read-only on the console)
    #[serde(default, skip_serializing_if = "is_false")]
    pub system: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub owner: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub modified: String,
}

impl Collection {
    /// Reference to a collection by name, as embedded in policy rules
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
