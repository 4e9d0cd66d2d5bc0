//! Admission policy schema

use serde::{Deserialize, Serialize};

use super::{ADMISSION_EFFECTS, SchemaResult, Validate, one_of, required};

/// One admission rule (a Rego script plus its effect)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdmissionRuleSchema {
    pub name: String,
    pub description: String,
    pub disabled: bool,
    pub effect: String,
    pub script: String,
}

impl Validate for AdmissionRuleSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        required(path, "name", &self.name)?;
        one_of(path, "effect", &self.effect, ADMISSION_EFFECTS)
    }
}
