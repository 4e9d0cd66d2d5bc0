//! Cloud account scan rule schema

use serde::{Deserialize, Serialize};

use super::{SchemaResult, Validate, required, singleton};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CloudScanRuleSchema {
    pub credential_id: String,
    pub discovery_enabled: bool,
    pub serverless_radar_enabled: bool,
    pub vm_tags_enabled: bool,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub agentless_scan: Option<AgentlessScanSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub serverless_scan: Option<ServerlessScanSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgentlessScanSchema {
    pub enabled: bool,
    pub auto_scale: bool,
    pub hub_account: bool,
    pub hub_credential_id: String,
    pub included_tag: Vec<ResourceTagSchema>,
    pub excluded_tag: Vec<ResourceTagSchema>,
    pub regions: Vec<String>,
    pub scanners: i32,
    pub scan_non_running: bool,
    pub security_group: String,
    pub subnet: String,
    pub skip_permissions_check: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourceTagSchema {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerlessScanSchema {
    pub enabled: bool,
    pub cap: i32,
    pub scan_all_versions: bool,
    pub scan_layers: bool,
}

impl Validate for CloudScanRuleSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        required(path, "credential_id", &self.credential_id)
    }
}
