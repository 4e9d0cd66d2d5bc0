//! Alert profile models

use serde::{Deserialize, Serialize};

use super::is_false;

/// Named notification channel plus the event categories that trigger it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertProfile {
    #[serde(rename = "_id")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub owner: String,

    #[serde(default)]
    pub policy: AlertPolicy,

    #[serde(default)]
    pub webhook: Webhook,
}

/// Which event categories trigger the profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertPolicy {
    #[serde(default)]
    pub admission: AlertTrigger,

    #[serde(default)]
    pub agentless_app_firewall: AlertTrigger,

    #[serde(default)]
    pub app_embedded_app_firewall: AlertTrigger,

    #[serde(default)]
    pub app_embedded_runtime: AlertTrigger,

    #[serde(default)]
    pub cloud_discovery: AlertTrigger,

    #[serde(default)]
    pub code_repo_vulnerability: AlertTrigger,

    #[serde(default)]
    pub container_app_firewall: AlertTrigger,

    #[serde(default)]
    pub container_compliance: AlertTrigger,

    #[serde(default)]
    pub container_compliance_scan: AlertTrigger,

    #[serde(default)]
    pub container_runtime: AlertTrigger,

    #[serde(default)]
    pub container_vulnerability: AlertTrigger,

    #[serde(default)]
    pub defender: AlertTrigger,

    #[serde(default)]
    pub docker: AlertTrigger,

    #[serde(default)]
    pub host_app_firewall: AlertTrigger,

    #[serde(default)]
    pub host_compliance: AlertTrigger,

    #[serde(default)]
    pub host_runtime: AlertTrigger,

    #[serde(default)]
    pub host_vulnerability: AlertTrigger,

    #[serde(default)]
    pub image_compliance: AlertTrigger,

    #[serde(default)]
    pub image_vulnerability: AlertTrigger,

    #[serde(default)]
    pub incident: AlertTrigger,

    #[serde(default)]
    pub kubernetes_audit: AlertTrigger,

    #[serde(default)]
    pub network_firewall: AlertTrigger,

    #[serde(default)]
    pub serverless_app_firewall: AlertTrigger,

    #[serde(default)]
    pub serverless_runtime: AlertTrigger,

    #[serde(default)]
    pub waas_health: AlertTrigger,
}

/// Trigger settings for a single event category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertTrigger {
    #[serde(default)]
    pub enabled: bool,

    /// Fire for every rule, ignoring `rules`
    #[serde(default)]
    pub all_rules: bool,

    /// Names of the rules that fire the alert
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub custom_json: String,

    #[serde(default, rename = "credentialID", skip_serializing_if = "String::is_empty")]
    pub credential_id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ca_cert: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub skip_cert_verification: bool,
}
