//! Typed configuration schemas, one tree per resource kind
//!
//! A resource document's `spec` is deserialized into one of these trees.
//! Keys are snake_case. A nested optional block is an `Option<T>` here and a
//! list of at most one map on the wire (see [`singleton`]); repeated blocks
//! are plain `Vec<T>`. Fields missing from a document take the block's
//! `Default`.
//!
//! Every tree implements [`Validate`], which checks enum-like strings against
//! their allowed values. Validation runs before any schema is converted to an
//! API object.

pub mod access;
pub mod admission;
pub mod alert_profile;
pub mod cloud_scan;
pub mod collection;
pub mod compliance;
pub mod credential;
pub mod custom_rule;
pub mod registry;
pub mod runtime;
pub mod singleton;
pub mod tag;
pub mod waas;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

pub use access::{GroupSchema, PermissionSchema, RolePermissionSchema, RoleSchema, UserSchema};
pub use admission::AdmissionRuleSchema;
pub use alert_profile::{AlertPolicySchema, AlertProfileSchema, AlertTriggerSchema, WebhookSchema};
pub use cloud_scan::{
    AgentlessScanSchema, CloudScanRuleSchema, ResourceTagSchema, ServerlessScanSchema,
};
pub use collection::CollectionSchema;
pub use compliance::{ComplianceCheckSchema, ComplianceConditionSchema, ComplianceRuleSchema};
pub use credential::{CredentialSchema, TemporaryTokenSchema};
pub use custom_rule::{CustomComplianceSchema, CustomRuleSchema};
pub use registry::{RegistrySettingsSchema, RegistrySpecificationSchema};
pub use runtime::{RuntimeContainerRuleSchema, RuntimeHostRuleSchema};
pub use tag::{TagAssignmentSchema, TagSchema};
pub use waas::WaasRuleSchema;

pub type SchemaResult = std::result::Result<(), SchemaError>;

// ============================================================================
// Allowed values
// ============================================================================

pub const ADMISSION_EFFECTS: &[&str] = &["allow", "alert", "block"];
pub const COMPLIANCE_EFFECTS: &[&str] = &["ignore", "alert", "block"];
pub const RUNTIME_EFFECTS: &[&str] = &["disable", "alert", "prevent", "block"];
pub const WAAS_EFFECTS: &[&str] = &["disable", "alert", "prevent", "ban", "allow"];
pub const BOT_SENSITIVITIES: &[&str] = &["lax", "moderate", "strict"];
pub const TLS_VERSIONS: &[&str] = &["1.0", "1.1", "1.2", "1.3"];
pub const SAME_SITE: &[&str] = &["Lax", "Strict", "None"];
pub const CREDENTIAL_TYPES: &[&str] = &[
    "aws",
    "azure",
    "gcp",
    "ibmCloud",
    "oci",
    "apiToken",
    "githubToken",
    "gitlabToken",
    "basic",
    "dtr",
    "kubeconfig",
    "certificate",
];
pub const AUTH_TYPES: &[&str] = &["basic", "ldap", "saml", "oauth", "oidc"];
pub const CUSTOM_RULE_TYPES: &[&str] = &[
    "processes",
    "filesystem",
    "network-outgoing",
    "kubernetes-audit",
    "waas-request",
    "waas-response",
];
pub const SEVERITIES: &[&str] = &["low", "medium", "high", "critical"];
pub const REGISTRY_VERSIONS: &[&str] = &[
    "2",
    "aws",
    "azure",
    "gcr",
    "gar",
    "artifactory",
    "harbor",
    "nexus",
    "quay",
    "redhat",
    "ibmcloud",
    "gitlab",
];
pub const OPERATING_SYSTEMS: &[&str] = &["linux", "windows"];
pub const PARAMETER_LOCATIONS: &[&str] = &["path", "query", "header", "cookie", "body"];

// ============================================================================
// Validation
// ============================================================================

/// Check enum-like fields against their allowed values.
///
/// `path` is the location of `self` inside the document (empty at the root)
/// and prefixes every field name in the error.
pub trait Validate {
    fn validate(&self, path: &str) -> SchemaResult;
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self, path: &str) -> SchemaResult {
        match self {
            Some(inner) => inner.validate(path),
            None => Ok(()),
        }
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self, path: &str) -> SchemaResult {
        for (i, item) in self.iter().enumerate() {
            item.validate(&format!("{path}[{i}]"))?;
        }
        Ok(())
    }
}

/// Join a block path and a field name.
pub fn field(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

/// An empty value means "unset" and is always accepted.
pub fn one_of(path: &str, name: &str, value: &str, allowed: &'static [&'static str]) -> SchemaResult {
    if value.is_empty() || allowed.contains(&value) {
        return Ok(());
    }
    Err(SchemaError::InvalidValue {
        field: field(path, name),
        value: value.to_string(),
        allowed,
    })
}

pub fn required(path: &str, name: &str, value: &str) -> SchemaResult {
    if value.is_empty() {
        return Err(SchemaError::Required(field(path, name)));
    }
    Ok(())
}

/// Schema of a singleton policy: an ordered rule list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicySchema<R> {
    pub rule: Vec<R>,
}

impl<R: Validate> Validate for PolicySchema<R> {
    fn validate(&self, path: &str) -> SchemaResult {
        self.rule.validate(&field(path, "rule"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_of_accepts_empty_and_allowed() {
        assert!(one_of("", "effect", "", ADMISSION_EFFECTS).is_ok());
        assert!(one_of("", "effect", "block", ADMISSION_EFFECTS).is_ok());
    }

    #[test]
    fn test_one_of_rejects_unknown_with_path() {
        let err = one_of("rule[2]", "effect", "explode", ADMISSION_EFFECTS).unwrap_err();
        match err {
            SchemaError::InvalidValue { field, value, .. } => {
                assert_eq!(field, "rule[2].effect");
                assert_eq!(value, "explode");
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_vec_validation_reports_index() {
        let policy = PolicySchema {
            rule: vec![
                AdmissionRuleSchema {
                    name: "ok".to_string(),
                    effect: "alert".to_string(),
                    ..Default::default()
                },
                AdmissionRuleSchema {
                    name: "bad".to_string(),
                    effect: "nope".to_string(),
                    ..Default::default()
                },
            ],
        };
        let err = policy.validate("").unwrap_err();
        assert!(err.to_string().contains("rule[1].effect"));
    }

    #[test]
    fn test_required() {
        assert!(required("", "name", "x").is_ok());
        let err = required("", "name", "").unwrap_err();
        assert!(matches!(err, SchemaError::Required(f) if f == "name"));
    }
}
