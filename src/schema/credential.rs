//! Credential schema
//!
//! `secret`, `api_token` and the temporary token secrets are write-only: the
//! console only ever returns them encrypted, so they read back empty.

use serde::{Deserialize, Serialize};

use super::{CREDENTIAL_TYPES, SchemaResult, Validate, one_of, required, singleton};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CredentialSchema {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub account_id: String,
    pub account_guid: String,
    pub secret: String,
    pub api_token: String,
    pub role_arn: String,
    pub use_aws_role: bool,
    pub use_sts_regional_endpoint: bool,
    pub ca_cert: String,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub temporary_token: Option<TemporaryTokenSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemporaryTokenSchema {
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub duration: i32,
    pub token: String,
}

impl Validate for CredentialSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        required(path, "name", &self.name)?;
        required(path, "type", &self.kind)?;
        one_of(path, "type", &self.kind, CREDENTIAL_TYPES)
    }
}
