//! Compliance policy schema (container, host and code repository)

use serde::{Deserialize, Serialize};

use super::{COMPLIANCE_EFFECTS, SchemaResult, Validate, field, one_of, required, singleton};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComplianceRuleSchema {
    pub name: String,
    pub collections: Vec<String>,
    pub effect: String,
    pub block_message: String,
    pub disabled: bool,
    pub notes: String,
    pub verbose: bool,
    pub show_passed_checks: bool,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub condition: Option<ComplianceConditionSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComplianceConditionSchema {
    pub check: Vec<ComplianceCheckSchema>,
}

/// A compliance check by numeric id; `block` upgrades it from alert to block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComplianceCheckSchema {
    pub id: i32,
    pub block: bool,
}

impl Validate for ComplianceRuleSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        required(path, "name", &self.name)?;
        one_of(path, "effect", &self.effect, COMPLIANCE_EFFECTS)?;
        self.condition.validate(&field(path, "condition"))
    }
}

impl Validate for ComplianceConditionSchema {
    fn validate(&self, _path: &str) -> SchemaResult {
        Ok(())
    }
}
