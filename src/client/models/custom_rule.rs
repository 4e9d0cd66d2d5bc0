//! Custom runtime rules and custom compliance checks

use serde::{Deserialize, Serialize};

/// Script-backed runtime rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomRule {
    #[serde(rename = "_id")]
    pub id: i32,

    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,

    /// processes, filesystem, network-outgoing, kubernetes-audit, waas-request, waas-response
    #[serde(default, rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub script: String,

    #[serde(default, skip_serializing)]
    pub owner: String,

    #[serde(default, skip_serializing)]
    pub modified: i64,
}

/// Script-backed compliance check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomCompliance {
    #[serde(rename = "_id")]
    pub id: i32,

    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(default)]
    pub script: String,

    /// critical, high, medium or low
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub severity: String,

    #[serde(default, skip_serializing)]
    pub owner: String,
}
