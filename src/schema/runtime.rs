//! Runtime policy schemas (container and host)

use serde::{Deserialize, Serialize};

use super::{RUNTIME_EFFECTS, SchemaResult, Validate, field, one_of, required, singleton};

/// Reference to a custom rule from inside a runtime rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeCustomRuleSchema {
    pub id: i32,
    pub action: String,
    pub effect: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortRangeSchema {
    pub deny: bool,
    pub start: i32,
    pub end: i32,
}

impl Validate for RuntimeCustomRuleSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        one_of(path, "effect", &self.effect, RUNTIME_EFFECTS)
    }
}

// ============================================================================
// Container runtime
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeContainerRuleSchema {
    pub name: String,
    pub collections: Vec<String>,
    pub notes: String,
    pub disabled: bool,
    pub advanced_protection_effect: String,
    pub cloud_metadata_enforcement: bool,
    pub kubernetes_enforcement: bool,
    pub wildfire_analysis: String,
    pub custom_rule: Vec<RuntimeCustomRuleSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub dns: Option<ContainerDnsSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub filesystem: Option<ContainerFilesystemSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub network: Option<ContainerNetworkSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub processes: Option<ContainerProcessesSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContainerDnsSchema {
    pub default_effect: String,
    pub allowed: Vec<String>,
    pub denied: Vec<String>,
    pub denied_effect: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContainerFilesystemSchema {
    pub allowed: Vec<String>,
    pub backdoor_files: bool,
    pub default_effect: String,
    pub denied: Vec<String>,
    pub denied_effect: String,
    pub encrypted_binaries: bool,
    pub new_files: bool,
    pub suspicious_elf_headers: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContainerNetworkSchema {
    pub allowed_ips: Vec<String>,
    pub denied_ips: Vec<String>,
    pub denied_effect: String,
    pub default_effect: String,
    pub detect_port_scan: bool,
    pub listening_port: Vec<PortRangeSchema>,
    pub outbound_port: Vec<PortRangeSchema>,
    pub skip_modified_processes: bool,
    pub skip_raw_sockets: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContainerProcessesSchema {
    pub allowed: Vec<String>,
    pub check_parent_child: bool,
    pub crypto_miners: String,
    pub default_effect: String,
    pub denied: Vec<String>,
    pub denied_effect: String,
    pub lateral_movement: String,
    pub modified_process_effect: String,
    pub reverse_shell: String,
    pub suid_binaries: String,
    pub unknown_origin_binary: String,
}

impl Validate for RuntimeContainerRuleSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        required(path, "name", &self.name)?;
        one_of(
            path,
            "advanced_protection_effect",
            &self.advanced_protection_effect,
            RUNTIME_EFFECTS,
        )?;
        one_of(path, "wildfire_analysis", &self.wildfire_analysis, RUNTIME_EFFECTS)?;
        self.custom_rule.validate(&field(path, "custom_rule"))?;
        self.dns.validate(&field(path, "dns"))?;
        self.filesystem.validate(&field(path, "filesystem"))?;
        self.network.validate(&field(path, "network"))?;
        self.processes.validate(&field(path, "processes"))
    }
}

impl Validate for ContainerDnsSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        one_of(path, "default_effect", &self.default_effect, RUNTIME_EFFECTS)?;
        one_of(path, "denied_effect", &self.denied_effect, RUNTIME_EFFECTS)
    }
}

impl Validate for ContainerFilesystemSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        one_of(path, "default_effect", &self.default_effect, RUNTIME_EFFECTS)?;
        one_of(path, "denied_effect", &self.denied_effect, RUNTIME_EFFECTS)
    }
}

impl Validate for ContainerNetworkSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        one_of(path, "default_effect", &self.default_effect, RUNTIME_EFFECTS)?;
        one_of(path, "denied_effect", &self.denied_effect, RUNTIME_EFFECTS)
    }
}

impl Validate for ContainerProcessesSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        for (name, value) in [
            ("crypto_miners", &self.crypto_miners),
            ("default_effect", &self.default_effect),
            ("denied_effect", &self.denied_effect),
            ("lateral_movement", &self.lateral_movement),
            ("modified_process_effect", &self.modified_process_effect),
            ("reverse_shell", &self.reverse_shell),
            ("suid_binaries", &self.suid_binaries),
            ("unknown_origin_binary", &self.unknown_origin_binary),
        ] {
            one_of(path, name, value, RUNTIME_EFFECTS)?;
        }
        Ok(())
    }
}

// ============================================================================
// Host runtime
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeHostRuleSchema {
    pub name: String,
    pub collections: Vec<String>,
    pub notes: String,
    pub disabled: bool,
    pub custom_rule: Vec<RuntimeCustomRuleSchema>,
    pub file_integrity_rule: Vec<FileIntegrityRuleSchema>,
    pub log_inspection_rule: Vec<LogInspectionRuleSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub anti_malware: Option<HostAntiMalwareSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub dns: Option<HostDnsSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub forensic: Option<HostForensicSchema>,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub network: Option<HostNetworkSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostAntiMalwareSchema {
    pub allowed_processes: Vec<String>,
    pub crypto_miner: String,
    pub custom_feed: String,
    pub detect_compiler_generated_binary: bool,
    pub encrypted_binaries: String,
    pub execution_flow_hijack: String,
    pub intelligence_feed: String,
    pub reverse_shell: String,
    pub service_unknown_origin_binary: String,
    pub skip_ssh_tracking: bool,
    pub suspicious_elf_headers: String,
    pub temp_filesystem_processes: String,
    pub user_unknown_origin_binary: String,
    pub web_shell: String,
    pub wildfire_analysis: String,

    #[serde(with = "singleton", skip_serializing_if = "Option::is_none")]
    pub denied_processes: Option<DeniedProcessesSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeniedProcessesSchema {
    pub effect: String,
    pub paths: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostDnsSchema {
    pub allowed: Vec<String>,
    pub denied: Vec<String>,
    pub denied_effect: String,
    pub intelligence_feed: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileIntegrityRuleSchema {
    pub path: String,
    pub dir: bool,
    pub exclusions: Vec<String>,
    pub metadata: bool,
    pub process_allow_list: Vec<String>,
    pub read: bool,
    pub recursive: bool,
    pub write: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostForensicSchema {
    pub activities_disabled: bool,
    pub docker_enabled: bool,
    pub readonly_docker_enabled: bool,
    pub service_activities_enabled: bool,
    pub sshd_enabled: bool,
    pub sudo_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogInspectionRuleSchema {
    pub path: String,
    pub regex: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostNetworkSchema {
    pub allowed_outbound_ips: Vec<String>,
    pub custom_feed: String,
    pub denied_listening_port: Vec<PortRangeSchema>,
    pub denied_outbound_ips: Vec<String>,
    pub denied_outbound_port: Vec<PortRangeSchema>,
    pub denied_effect: String,
    pub intelligence_feed: String,
}

impl Validate for RuntimeHostRuleSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        required(path, "name", &self.name)?;
        self.custom_rule.validate(&field(path, "custom_rule"))?;
        self.anti_malware.validate(&field(path, "anti_malware"))?;
        self.dns.validate(&field(path, "dns"))?;
        self.network.validate(&field(path, "network"))
    }
}

impl Validate for HostAntiMalwareSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        for (name, value) in [
            ("crypto_miner", &self.crypto_miner),
            ("encrypted_binaries", &self.encrypted_binaries),
            ("execution_flow_hijack", &self.execution_flow_hijack),
            ("intelligence_feed", &self.intelligence_feed),
            ("reverse_shell", &self.reverse_shell),
            ("service_unknown_origin_binary", &self.service_unknown_origin_binary),
            ("suspicious_elf_headers", &self.suspicious_elf_headers),
            ("temp_filesystem_processes", &self.temp_filesystem_processes),
            ("user_unknown_origin_binary", &self.user_unknown_origin_binary),
            ("web_shell", &self.web_shell),
            ("wildfire_analysis", &self.wildfire_analysis),
        ] {
            one_of(path, name, value, RUNTIME_EFFECTS)?;
        }
        self.denied_processes
            .validate(&field(path, "denied_processes"))
    }
}

impl Validate for DeniedProcessesSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        one_of(path, "effect", &self.effect, RUNTIME_EFFECTS)
    }
}

impl Validate for HostDnsSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        one_of(path, "denied_effect", &self.denied_effect, RUNTIME_EFFECTS)?;
        one_of(path, "intelligence_feed", &self.intelligence_feed, RUNTIME_EFFECTS)
    }
}

impl Validate for HostNetworkSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        one_of(path, "denied_effect", &self.denied_effect, RUNTIME_EFFECTS)?;
        one_of(path, "custom_feed", &self.custom_feed, RUNTIME_EFFECTS)?;
        one_of(path, "intelligence_feed", &self.intelligence_feed, RUNTIME_EFFECTS)
    }
}
