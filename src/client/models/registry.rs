//! Registry scan settings

use serde::{Deserialize, Serialize};

use super::{is_false, is_zero};

/// Registry scan settings: a singleton list replaced as a whole on update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySettings {
    #[serde(default)]
    pub specifications: Vec<RegistrySpecification>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySpecification {
    /// Registry type: 2 (Docker v2), aws, azure, gcr, artifactory, harbor, ...
    #[serde(default)]
    pub version: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub registry: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub repository: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag: String,

    /// linux or windows
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub os: String,

    /// Number of most recent images to scan (0 = all)
    #[serde(default)]
    pub cap: i32,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub scanners: i32,

    #[serde(default, rename = "credentialID", skip_serializing_if = "String::is_empty")]
    pub credential_id: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_repositories: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collections: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version_pattern: String,

    #[serde(default, rename = "useAWSRole", skip_serializing_if = "is_false")]
    pub use_aws_role: bool,
}
