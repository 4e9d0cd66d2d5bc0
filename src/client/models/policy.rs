//! Policy envelope shared by every policy family
//!
//! Each policy is a singleton on the console, addressed by its type rather
//! than a user-chosen name. The rule list is ordered and the order is kept
//! as-is in both directions.

use serde::{Deserialize, Serialize};

/// Policy family, with the endpoint and `policyType` constant it maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Admission,
    ComplianceContainer,
    ComplianceHost,
    ComplianceCoderepo,
    RuntimeContainer,
    RuntimeHost,
    WaasContainer,
}

impl PolicyKind {
    /// Path below `/api/v1`
    pub fn path(&self) -> &'static str {
        match self {
            PolicyKind::Admission => "policies/admission",
            PolicyKind::ComplianceContainer => "policies/compliance/container",
            PolicyKind::ComplianceHost => "policies/compliance/host",
            PolicyKind::ComplianceCoderepo => "policies/compliance/coderepos",
            PolicyKind::RuntimeContainer => "policies/runtime/container",
            PolicyKind::RuntimeHost => "policies/runtime/host",
            PolicyKind::WaasContainer => "policies/firewall/app/container",
        }
    }

    /// Value of the `policyType` field; also used as the resource id
    pub fn policy_type(&self) -> &'static str {
        match self {
            PolicyKind::Admission => "admission",
            PolicyKind::ComplianceContainer => "containerCompliance",
            PolicyKind::ComplianceHost => "hostCompliance",
            PolicyKind::ComplianceCoderepo => "codeRepoCompliance",
            PolicyKind::RuntimeContainer => "containerRuntime",
            PolicyKind::RuntimeHost => "hostRuntime",
            PolicyKind::WaasContainer => "containerAppFirewall",
        }
    }
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.policy_type())
    }
}

/// Policy object: an ordered rule list plus its type constant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy<R> {
    #[serde(default, rename = "_id", skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub policy_type: String,

    #[serde(default = "Vec::new")]
    pub rules: Vec<R>,
}

impl<R> Policy<R> {
    /// Build a policy of the given kind from an ordered rule list
    pub fn new(kind: PolicyKind, rules: Vec<R>) -> Self {
        Self {
            id: String::new(),
            policy_type: kind.policy_type().to_string(),
            rules,
        }
    }
}

impl<R> Default for Policy<R> {
    fn default() -> Self {
        Self {
            id: String::new(),
            policy_type: String::new(),
            rules: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_kind_paths_are_distinct() {
        let kinds = [
            PolicyKind::Admission,
            PolicyKind::ComplianceContainer,
            PolicyKind::ComplianceHost,
            PolicyKind::ComplianceCoderepo,
            PolicyKind::RuntimeContainer,
            PolicyKind::RuntimeHost,
            PolicyKind::WaasContainer,
        ];
        let paths: std::collections::HashSet<_> = kinds.iter().map(|k| k.path()).collect();
        assert_eq!(paths.len(), kinds.len());
    }

    #[test]
    fn test_policy_deserializes_without_rules() {
        let policy: Policy<serde_json::Value> =
            serde_json::from_str(r#"{"_id":"admission","policyType":"admission"}"#).unwrap();
        assert!(policy.rules.is_empty());
        assert_eq!(policy.policy_type, "admission");
    }
}
