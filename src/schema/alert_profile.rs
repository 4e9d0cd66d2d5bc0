//! Alert profile schema

use serde::{Deserialize, Serialize};

use super::{SchemaResult, Validate, field, required, singleton};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlertProfileSchema {
    pub name: String,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub webhook: Option<WebhookSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub policy: Option<AlertPolicySchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WebhookSchema {
    pub enabled: bool,
    pub url: String,
    pub custom_json: String,
    pub credential_id: String,
    pub ca_cert: String,
    pub skip_cert_verification: bool,
}

/// Event categories that trigger the profile, one optional block each
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlertPolicySchema {
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub admission: Option<AlertTriggerSchema>,
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub agentless_app_firewall: Option<AlertTriggerSchema>,
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub app_embedded_app_firewall: Option<AlertTriggerSchema>,
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub app_embedded_runtime: Option<AlertTriggerSchema>,
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub cloud_discovery: Option<AlertTriggerSchema>,
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub code_repo_vulnerability: Option<AlertTriggerSchema>,
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub container_app_firewall: Option<AlertTriggerSchema>,
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub container_compliance: Option<AlertTriggerSchema>,
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub container_compliance_scan: Option<AlertTriggerSchema>,
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub container_runtime: Option<AlertTriggerSchema>,
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub container_vulnerability: Option<AlertTriggerSchema>,
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub defender: Option<AlertTriggerSchema>,
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub docker: Option<AlertTriggerSchema>,
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub host_app_firewall: Option<AlertTriggerSchema>,
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub host_compliance: Option<AlertTriggerSchema>,
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub host_runtime: Option<AlertTriggerSchema>,
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub host_vulnerability: Option<AlertTriggerSchema>,
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub image_compliance: Option<AlertTriggerSchema>,
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub image_vulnerability: Option<AlertTriggerSchema>,
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub incident: Option<AlertTriggerSchema>,
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub kubernetes_audit: Option<AlertTriggerSchema>,
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub network_firewall: Option<AlertTriggerSchema>,
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub serverless_app_firewall: Option<AlertTriggerSchema>,
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub serverless_runtime: Option<AlertTriggerSchema>,
    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub waas_health: Option<AlertTriggerSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlertTriggerSchema {
    pub enabled: bool,
    pub all_rules: bool,
    pub rules: Vec<String>,
}

impl Validate for AlertProfileSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        required(path, "name", &self.name)?;
        if let Some(webhook) = &self.webhook {
            if webhook.enabled {
                required(&field(path, "webhook"), "url", &webhook.url)?;
            }
        }
        Ok(())
    }
}
