//! Compliance policy rules (container, host, code repository)

use serde::{Deserialize, Serialize};

use super::{Collection, is_false};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceRule {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collections: Vec<Collection>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub effect: String,

    #[serde(default)]
    pub condition: ComplianceCondition,

    #[serde(default, rename = "blockMsg", skip_serializing_if = "String::is_empty")]
    pub block_message: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub verbose: bool,

    /// Report passed checks as well as failures
    #[serde(default, rename = "allCompliance", skip_serializing_if = "is_false")]
    pub show_passed_checks: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceCondition {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vulnerabilities: Vec<ComplianceCheck>,
}

/// One compliance check id and whether failing it blocks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceCheck {
    pub id: i32,

    #[serde(default)]
    pub block: bool,
}
