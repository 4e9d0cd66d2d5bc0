use super::{block, collection_names, collections, map_from, map_into};
use crate::client::models::{
    ContainerDns, ContainerFilesystem, ContainerNetwork, ContainerProcesses, DeniedProcesses,
    FileIntegrityRule, HostAntiMalware, HostDns, HostForensic, HostNetwork, LogInspectionRule,
    PortRange, RuntimeContainerRule, RuntimeCustomRule, RuntimeHostRule,
};
use crate::schema::runtime::{
    ContainerDnsSchema, ContainerFilesystemSchema, ContainerNetworkSchema,
    ContainerProcessesSchema, DeniedProcessesSchema, FileIntegrityRuleSchema,
    HostAntiMalwareSchema, HostDnsSchema, HostForensicSchema, HostNetworkSchema,
    LogInspectionRuleSchema, PortRangeSchema, RuntimeContainerRuleSchema,
    RuntimeCustomRuleSchema, RuntimeHostRuleSchema,
};

// ============================================================================
// Shared leaves
// ============================================================================

impl From<RuntimeCustomRuleSchema> for RuntimeCustomRule {
    fn from(s: RuntimeCustomRuleSchema) -> Self {
        Self {
            id: s.id,
            action: s.action,
            effect: s.effect,
        }
    }
}

impl From<&RuntimeCustomRule> for RuntimeCustomRuleSchema {
    fn from(r: &RuntimeCustomRule) -> Self {
        Self {
            id: r.id,
            action: r.action.clone(),
            effect: r.effect.clone(),
        }
    }
}

impl From<PortRangeSchema> for PortRange {
    fn from(s: PortRangeSchema) -> Self {
        Self {
            deny: s.deny,
            start: s.start,
            end: s.end,
        }
    }
}

impl From<&PortRange> for PortRangeSchema {
    fn from(r: &PortRange) -> Self {
        Self {
            deny: r.deny,
            start: r.start,
            end: r.end,
        }
    }
}

// ============================================================================
// Container runtime
// ============================================================================

impl From<RuntimeContainerRuleSchema> for RuntimeContainerRule {
    fn from(s: RuntimeContainerRuleSchema) -> Self {
        Self {
            name: s.name,
            collections: collections(s.collections),
            notes: s.notes,
            disabled: s.disabled,
            advanced_protection_effect: s.advanced_protection_effect,
            cloud_metadata_enforcement: s.cloud_metadata_enforcement,
            kubernetes_enforcement: s.kubernetes_enforcement,
            wild_fire_analysis: s.wildfire_analysis,
            custom_rules: map_into(s.custom_rule),
            dns: s.dns.unwrap_or_default().into(),
            filesystem: s.filesystem.unwrap_or_default().into(),
            network: s.network.unwrap_or_default().into(),
            processes: s.processes.unwrap_or_default().into(),
        }
    }
}

impl From<&RuntimeContainerRule> for RuntimeContainerRuleSchema {
    fn from(r: &RuntimeContainerRule) -> Self {
        Self {
            name: r.name.clone(),
            collections: collection_names(&r.collections),
            notes: r.notes.clone(),
            disabled: r.disabled,
            advanced_protection_effect: r.advanced_protection_effect.clone(),
            cloud_metadata_enforcement: r.cloud_metadata_enforcement,
            kubernetes_enforcement: r.kubernetes_enforcement,
            wildfire_analysis: r.wild_fire_analysis.clone(),
            custom_rule: map_from(&r.custom_rules),
            dns: block((&r.dns).into()),
            filesystem: block((&r.filesystem).into()),
            network: block((&r.network).into()),
            processes: block((&r.processes).into()),
        }
    }
}

impl From<ContainerDnsSchema> for ContainerDns {
    fn from(s: ContainerDnsSchema) -> Self {
        Self {
            default_effect: s.default_effect,
            allowed: s.allowed,
            denied: s.denied,
            denied_effect: s.denied_effect,
        }
    }
}

impl From<&ContainerDns> for ContainerDnsSchema {
    fn from(d: &ContainerDns) -> Self {
        Self {
            default_effect: d.default_effect.clone(),
            allowed: d.allowed.clone(),
            denied: d.denied.clone(),
            denied_effect: d.denied_effect.clone(),
        }
    }
}

impl From<ContainerFilesystemSchema> for ContainerFilesystem {
    fn from(s: ContainerFilesystemSchema) -> Self {
        Self {
            allowed_list: s.allowed,
            backdoor_files: s.backdoor_files,
            default_effect: s.default_effect,
            denied_list: s.denied,
            denied_effect: s.denied_effect,
            encrypted_binaries: s.encrypted_binaries,
            new_files: s.new_files,
            suspicious_elf_headers: s.suspicious_elf_headers,
        }
    }
}

impl From<&ContainerFilesystem> for ContainerFilesystemSchema {
    fn from(f: &ContainerFilesystem) -> Self {
        Self {
            allowed: f.allowed_list.clone(),
            backdoor_files: f.backdoor_files,
            default_effect: f.default_effect.clone(),
            denied: f.denied_list.clone(),
            denied_effect: f.denied_effect.clone(),
            encrypted_binaries: f.encrypted_binaries,
            new_files: f.new_files,
            suspicious_elf_headers: f.suspicious_elf_headers,
        }
    }
}

impl From<ContainerNetworkSchema> for ContainerNetwork {
    fn from(s: ContainerNetworkSchema) -> Self {
        Self {
            allowed_ips: s.allowed_ips,
            denied_ips: s.denied_ips,
            denied_effect: s.denied_effect,
            default_effect: s.default_effect,
            detect_port_scan: s.detect_port_scan,
            listening_ports: map_into(s.listening_port),
            outbound_ports: map_into(s.outbound_port),
            skip_modified_proc: s.skip_modified_processes,
            skip_raw_sockets: s.skip_raw_sockets,
        }
    }
}

impl From<&ContainerNetwork> for ContainerNetworkSchema {
    fn from(n: &ContainerNetwork) -> Self {
        Self {
            allowed_ips: n.allowed_ips.clone(),
            denied_ips: n.denied_ips.clone(),
            denied_effect: n.denied_effect.clone(),
            default_effect: n.default_effect.clone(),
            detect_port_scan: n.detect_port_scan,
            listening_port: map_from(&n.listening_ports),
            outbound_port: map_from(&n.outbound_ports),
            skip_modified_processes: n.skip_modified_proc,
            skip_raw_sockets: n.skip_raw_sockets,
        }
    }
}

impl From<ContainerProcessesSchema> for ContainerProcesses {
    fn from(s: ContainerProcessesSchema) -> Self {
        Self {
            allowed_list: s.allowed,
            check_parent_child: s.check_parent_child,
            crypto_miners: s.crypto_miners,
            default_effect: s.default_effect,
            denied_list: s.denied,
            denied_effect: s.denied_effect,
            lateral_movement: s.lateral_movement,
            modified_process_effect: s.modified_process_effect,
            reverse_shell: s.reverse_shell,
            suid_binaries: s.suid_binaries,
            unknown_origin_binary: s.unknown_origin_binary,
        }
    }
}

impl From<&ContainerProcesses> for ContainerProcessesSchema {
    fn from(p: &ContainerProcesses) -> Self {
        Self {
            allowed: p.allowed_list.clone(),
            check_parent_child: p.check_parent_child,
            crypto_miners: p.crypto_miners.clone(),
            default_effect: p.default_effect.clone(),
            denied: p.denied_list.clone(),
            denied_effect: p.denied_effect.clone(),
            lateral_movement: p.lateral_movement.clone(),
            modified_process_effect: p.modified_process_effect.clone(),
            reverse_shell: p.reverse_shell.clone(),
            suid_binaries: p.suid_binaries.clone(),
            unknown_origin_binary: p.unknown_origin_binary.clone(),
        }
    }
}

// ============================================================================
// Host runtime
// ============================================================================

impl From<RuntimeHostRuleSchema> for RuntimeHostRule {
    fn from(s: RuntimeHostRuleSchema) -> Self {
        Self {
            name: s.name,
            collections: collections(s.collections),
            notes: s.notes,
            disabled: s.disabled,
            anti_malware: s.anti_malware.unwrap_or_default().into(),
            custom_rules: map_into(s.custom_rule),
            dns: s.dns.unwrap_or_default().into(),
            file_integrity_rules: map_into(s.file_integrity_rule),
            forensic: s.forensic.unwrap_or_default().into(),
            log_inspection_rules: map_into(s.log_inspection_rule),
            network: s.network.unwrap_or_default().into(),
        }
    }
}

impl From<&RuntimeHostRule> for RuntimeHostRuleSchema {
    fn from(r: &RuntimeHostRule) -> Self {
        Self {
            name: r.name.clone(),
            collections: collection_names(&r.collections),
            notes: r.notes.clone(),
            disabled: r.disabled,
            custom_rule: map_from(&r.custom_rules),
            file_integrity_rule: map_from(&r.file_integrity_rules),
            log_inspection_rule: map_from(&r.log_inspection_rules),
            anti_malware: block((&r.anti_malware).into()),
            dns: block((&r.dns).into()),
            forensic: block((&r.forensic).into()),
            network: block((&r.network).into()),
        }
    }
}

impl From<HostAntiMalwareSchema> for HostAntiMalware {
    fn from(s: HostAntiMalwareSchema) -> Self {
        let denied = s.denied_processes.unwrap_or_default();
        Self {
            allowed_processes: s.allowed_processes,
            crypto_miner: s.crypto_miner,
            custom_feed: s.custom_feed,
            denied_processes: DeniedProcesses {
                effect: denied.effect,
                paths: denied.paths,
            },
            detect_compiler_generated_binary: s.detect_compiler_generated_binary,
            encrypted_binaries: s.encrypted_binaries,
            execution_flow_hijack: s.execution_flow_hijack,
            intelligence_feed: s.intelligence_feed,
            reverse_shell: s.reverse_shell,
            service_unknown_origin_binary: s.service_unknown_origin_binary,
            skip_ssh_tracking: s.skip_ssh_tracking,
            suspicious_elf_headers: s.suspicious_elf_headers,
            temp_fs_proc: s.temp_filesystem_processes,
            user_unknown_origin_binary: s.user_unknown_origin_binary,
            web_shell: s.web_shell,
            wild_fire_analysis: s.wildfire_analysis,
        }
    }
}

impl From<&HostAntiMalware> for HostAntiMalwareSchema {
    fn from(a: &HostAntiMalware) -> Self {
        Self {
            allowed_processes: a.allowed_processes.clone(),
            crypto_miner: a.crypto_miner.clone(),
            custom_feed: a.custom_feed.clone(),
            detect_compiler_generated_binary: a.detect_compiler_generated_binary,
            encrypted_binaries: a.encrypted_binaries.clone(),
            execution_flow_hijack: a.execution_flow_hijack.clone(),
            intelligence_feed: a.intelligence_feed.clone(),
            reverse_shell: a.reverse_shell.clone(),
            service_unknown_origin_binary: a.service_unknown_origin_binary.clone(),
            skip_ssh_tracking: a.skip_ssh_tracking,
            suspicious_elf_headers: a.suspicious_elf_headers.clone(),
            temp_filesystem_processes: a.temp_fs_proc.clone(),
            user_unknown_origin_binary: a.user_unknown_origin_binary.clone(),
            web_shell: a.web_shell.clone(),
            wildfire_analysis: a.wild_fire_analysis.clone(),
            denied_processes: block(DeniedProcessesSchema {
                effect: a.denied_processes.effect.clone(),
                paths: a.denied_processes.paths.clone(),
            }),
        }
    }
}

impl From<HostDnsSchema> for HostDns {
    fn from(s: HostDnsSchema) -> Self {
        Self {
            allow: s.allowed,
            deny: s.denied,
            deny_list_effect: s.denied_effect,
            intelligence_feed: s.intelligence_feed,
        }
    }
}

impl From<&HostDns> for HostDnsSchema {
    fn from(d: &HostDns) -> Self {
        Self {
            allowed: d.allow.clone(),
            denied: d.deny.clone(),
            denied_effect: d.deny_list_effect.clone(),
            intelligence_feed: d.intelligence_feed.clone(),
        }
    }
}

impl From<FileIntegrityRuleSchema> for FileIntegrityRule {
    fn from(s: FileIntegrityRuleSchema) -> Self {
        Self {
            dir: s.dir,
            exclusions: s.exclusions,
            metadata: s.metadata,
            path: s.path,
            process_allow_list: s.process_allow_list,
            read: s.read,
            recursive: s.recursive,
            write: s.write,
        }
    }
}

impl From<&FileIntegrityRule> for FileIntegrityRuleSchema {
    fn from(f: &FileIntegrityRule) -> Self {
        Self {
            path: f.path.clone(),
            dir: f.dir,
            exclusions: f.exclusions.clone(),
            metadata: f.metadata,
            process_allow_list: f.process_allow_list.clone(),
            read: f.read,
            recursive: f.recursive,
            write: f.write,
        }
    }
}

impl From<HostForensicSchema> for HostForensic {
    fn from(s: HostForensicSchema) -> Self {
        Self {
            activities_disabled: s.activities_disabled,
            docker_enabled: s.docker_enabled,
            readonly_docker_enabled: s.readonly_docker_enabled,
            service_activities_enabled: s.service_activities_enabled,
            sshd_enabled: s.sshd_enabled,
            sudo_enabled: s.sudo_enabled,
        }
    }
}

impl From<&HostForensic> for HostForensicSchema {
    fn from(f: &HostForensic) -> Self {
        Self {
            activities_disabled: f.activities_disabled,
            docker_enabled: f.docker_enabled,
            readonly_docker_enabled: f.readonly_docker_enabled,
            service_activities_enabled: f.service_activities_enabled,
            sshd_enabled: f.sshd_enabled,
            sudo_enabled: f.sudo_enabled,
        }
    }
}

impl From<LogInspectionRuleSchema> for LogInspectionRule {
    fn from(s: LogInspectionRuleSchema) -> Self {
        Self {
            path: s.path,
            regex: s.regex,
        }
    }
}

impl From<&LogInspectionRule> for LogInspectionRuleSchema {
    fn from(l: &LogInspectionRule) -> Self {
        Self {
            path: l.path.clone(),
            regex: l.regex.clone(),
        }
    }
}

impl From<HostNetworkSchema> for HostNetwork {
    fn from(s: HostNetworkSchema) -> Self {
        Self {
            allowed_outbound_ips: s.allowed_outbound_ips,
            custom_feed: s.custom_feed,
            denied_listening_ports: map_into(s.denied_listening_port),
            denied_outbound_ips: s.denied_outbound_ips,
            denied_outbound_ports: map_into(s.denied_outbound_port),
            deny_list_effect: s.denied_effect,
            intelligence_feed: s.intelligence_feed,
        }
    }
}

impl From<&HostNetwork> for HostNetworkSchema {
    fn from(n: &HostNetwork) -> Self {
        Self {
            allowed_outbound_ips: n.allowed_outbound_ips.clone(),
            custom_feed: n.custom_feed.clone(),
            denied_listening_port: map_from(&n.denied_listening_ports),
            denied_outbound_ips: n.denied_outbound_ips.clone(),
            denied_outbound_port: map_from(&n.denied_outbound_ports),
            denied_effect: n.deny_list_effect.clone(),
            intelligence_feed: n.intelligence_feed.clone(),
        }
    }
}
