//! Runtime policy rules (container and host)

use serde::{Deserialize, Serialize};

use super::{Collection, is_false};

/// Reference from a runtime rule to a custom rule, with its own action/effect
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeCustomRule {
    #[serde(rename = "_id")]
    pub id: i32,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub action: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub effect: String,
}

/// Port or port range in a network allow/deny list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRange {
    #[serde(default)]
    pub deny: bool,

    #[serde(default)]
    pub start: i32,

    #[serde(default)]
    pub end: i32,
}

// ============================================================================
// Container runtime
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeContainerRule {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collections: Vec<Collection>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub advanced_protection_effect: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub cloud_metadata_enforcement: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub kubernetes_enforcement: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub wild_fire_analysis: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_rules: Vec<RuntimeCustomRule>,

    #[serde(default)]
    pub dns: ContainerDns,

    #[serde(default)]
    pub filesystem: ContainerFilesystem,

    #[serde(default)]
    pub network: ContainerNetwork,

    #[serde(default)]
    pub processes: ContainerProcesses,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDns {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default_effect: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub denied: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub denied_effect: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerFilesystem {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_list: Vec<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub backdoor_files: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default_effect: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub denied_list: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub denied_effect: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub encrypted_binaries: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub new_files: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub suspicious_elf_headers: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerNetwork {
    #[serde(default, rename = "allowedIPs", skip_serializing_if = "Vec::is_empty")]
    pub allowed_ips: Vec<String>,

    #[serde(default, rename = "deniedIPs", skip_serializing_if = "Vec::is_empty")]
    pub denied_ips: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub denied_effect: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default_effect: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub detect_port_scan: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub listening_ports: Vec<PortRange>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outbound_ports: Vec<PortRange>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub skip_modified_proc: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub skip_raw_sockets: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProcesses {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_list: Vec<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub check_parent_child: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub crypto_miners: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default_effect: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub denied_list: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub denied_effect: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub lateral_movement: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub modified_process_effect: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reverse_shell: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub suid_binaries: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub unknown_origin_binary: String,
}

// ============================================================================
// Host runtime
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeHostRule {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collections: Vec<Collection>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,

    #[serde(default)]
    pub anti_malware: HostAntiMalware,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_rules: Vec<RuntimeCustomRule>,

    #[serde(default)]
    pub dns: HostDns,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_integrity_rules: Vec<FileIntegrityRule>,

    #[serde(default)]
    pub forensic: HostForensic,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub log_inspection_rules: Vec<LogInspectionRule>,

    #[serde(default)]
    pub network: HostNetwork,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostAntiMalware {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_processes: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub crypto_miner: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub custom_feed: String,

    #[serde(default)]
    pub denied_processes: DeniedProcesses,

    #[serde(default, skip_serializing_if = "is_false")]
    pub detect_compiler_generated_binary: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub encrypted_binaries: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub execution_flow_hijack: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub intelligence_feed: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reverse_shell: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub service_unknown_origin_binary: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub skip_ssh_tracking: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub suspicious_elf_headers: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub temp_fs_proc: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_unknown_origin_binary: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub web_shell: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub wild_fire_analysis: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeniedProcesses {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub effect: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostDns {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allow: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deny: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub deny_list_effect: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub intelligence_feed: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileIntegrityRule {
    #[serde(default, skip_serializing_if = "is_false")]
    pub dir: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclusions: Vec<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub metadata: bool,

    #[serde(default)]
    pub path: String,

    #[serde(default, rename = "procWhitelist", skip_serializing_if = "Vec::is_empty")]
    pub process_allow_list: Vec<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub read: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub recursive: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub write: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostForensic {
    #[serde(default, skip_serializing_if = "is_false")]
    pub activities_disabled: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub docker_enabled: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub readonly_docker_enabled: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub service_activities_enabled: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub sshd_enabled: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub sudo_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogInspectionRule {
    #[serde(default)]
    pub path: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regex: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostNetwork {
    #[serde(default, rename = "allowedOutboundIPs", skip_serializing_if = "Vec::is_empty")]
    pub allowed_outbound_ips: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub custom_feed: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub denied_listening_ports: Vec<PortRange>,

    #[serde(default, rename = "deniedOutboundIPs", skip_serializing_if = "Vec::is_empty")]
    pub denied_outbound_ips: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub denied_outbound_ports: Vec<PortRange>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub deny_list_effect: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub intelligence_feed: String,
}
