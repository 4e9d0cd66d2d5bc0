//! Cloud account scan rules

use serde::{Deserialize, Serialize};

use super::{Credential, is_false, is_zero};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudScanRule {
    /// Credential the rule scans with; also the rule's identity
    pub credential_id: String,

    /// Expanded credential, returned on read only
    #[serde(default, skip_serializing)]
    pub credential: Option<Credential>,

    #[serde(default)]
    pub agentless_scan_spec: AgentlessScanSpec,

    #[serde(default)]
    pub serverless_scan_spec: ServerlessScanSpec,

    #[serde(default, skip_serializing_if = "is_false")]
    pub discovery_enabled: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub serverless_radar_enabled: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub vm_tags_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentlessScanSpec {
    #[serde(default, skip_serializing_if = "is_false")]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub auto_scale: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub hub_account: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hub_credential_id: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included_tags: Vec<ResourceTag>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_tags: Vec<ResourceTag>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<String>,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub scanners: i32,

    #[serde(default, skip_serializing_if = "is_false")]
    pub scan_non_running: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub security_group: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subnet: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub skip_permissions_check: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTag {
    #[serde(default)]
    pub key: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerlessScanSpec {
    #[serde(default, skip_serializing_if = "is_false")]
    pub enabled: bool,

    /// Maximum number of functions scanned (0 = all)
    #[serde(default, skip_serializing_if = "is_zero")]
    pub cap: i32,

    #[serde(default, skip_serializing_if = "is_false")]
    pub scan_all_versions: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub scan_layers: bool,
}
