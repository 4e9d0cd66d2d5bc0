//! Custom rule and custom compliance check schemas
//!
//! `id` is assigned when the object is created and is read back from the
//! console; a value in a document is ignored on create.

use serde::{Deserialize, Serialize};

use super::{CUSTOM_RULE_TYPES, SEVERITIES, SchemaResult, Validate, one_of, required};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CustomRuleSchema {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub script: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CustomComplianceSchema {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub script: String,
    pub severity: String,
}

impl Validate for CustomRuleSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        required(path, "name", &self.name)?;
        required(path, "type", &self.kind)?;
        one_of(path, "type", &self.kind, CUSTOM_RULE_TYPES)
    }
}

impl Validate for CustomComplianceSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        required(path, "name", &self.name)?;
        one_of(path, "severity", &self.severity, SEVERITIES)
    }
}
