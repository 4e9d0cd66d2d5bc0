//! Admission policy rules

use serde::{Deserialize, Serialize};

use super::is_false;

/// Admission rule: a Rego script evaluated on Kubernetes admission requests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionRule {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,

    /// allow, alert or block
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub effect: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub script: String,
}
