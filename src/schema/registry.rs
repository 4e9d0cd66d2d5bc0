//! Registry scan settings schema

use serde::{Deserialize, Serialize};

use super::{OPERATING_SYSTEMS, REGISTRY_VERSIONS, SchemaResult, Validate, field, one_of};

/// The whole specification list; replaced as a unit on update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistrySettingsSchema {
    pub specification: Vec<RegistrySpecificationSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistrySpecificationSchema {
    pub version: String,
    pub registry: String,
    pub repository: String,
    pub tag: String,
    pub os: String,
    pub cap: i32,
    pub scanners: i32,
    pub credential_id: String,
    pub excluded_repositories: Vec<String>,
    pub excluded_tags: Vec<String>,
    pub collections: Vec<String>,
    pub version_pattern: String,
    pub use_aws_role: bool,
}

impl Validate for RegistrySettingsSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        self.specification
            .validate(&field(path, "specification"))
    }
}

impl Validate for RegistrySpecificationSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        one_of(path, "version", &self.version, REGISTRY_VERSIONS)?;
        one_of(path, "os", &self.os, OPERATING_SYSTEMS)
    }
}
