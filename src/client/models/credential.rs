//! Credential store models

use serde::{Deserialize, Serialize};

use super::{is_false, is_zero};

/// Secret value: `plain` is sent on write, the console returns `encrypted`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub encrypted: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub plain: String,
}

impl Secret {
    /// Secret carrying only a plain value, as used on create
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            encrypted: String::new(),
            plain: value.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.encrypted.is_empty() && self.plain.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    #[serde(rename = "_id")]
    pub id: String,

    /// aws, azure, gcp, basic, ...
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, rename = "accountID", skip_serializing_if = "String::is_empty")]
    pub account_id: String,

    #[serde(default, rename = "accountGUID", skip_serializing_if = "String::is_empty")]
    pub account_guid: String,

    #[serde(default, skip_serializing_if = "Secret::is_empty")]
    pub secret: Secret,

    #[serde(default, skip_serializing_if = "Secret::is_empty")]
    pub api_token: Secret,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub role_arn: String,

    #[serde(default, rename = "useAWSRole", skip_serializing_if = "is_false")]
    pub use_aws_role: bool,

    #[serde(default, rename = "useSTSRegionalEndpoint", skip_serializing_if = "is_false")]
    pub use_sts_regional_endpoint: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ca_cert: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<TemporaryToken>,

    // Server-computed, never sent back
    #[serde(default, skip_serializing)]
    pub last_modified: String,

    #[serde(default, skip_serializing)]
    pub owner: String,
}

/// Temporary AWS session credentials
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporaryToken {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub aws_access_key_id: String,

    #[serde(default, skip_serializing_if = "Secret::is_empty")]
    pub aws_secret_access_key: Secret,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub duration: i32,

    #[serde(default, skip_serializing_if = "Secret::is_empty")]
    pub token: Secret,
}
