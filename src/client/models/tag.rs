//! Tag models

use serde::{Deserialize, Serialize};

/// Named label with vulnerability assignments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub color: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vulns: Vec<TagVuln>,
}

/// Assignment of a tag to a CVE (optionally scoped to a package and resources)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagVuln {
    /// CVE identifier
    pub id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub package_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_type: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}
