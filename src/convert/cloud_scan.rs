use super::{block, map_from, map_into};
use crate::client::models::{AgentlessScanSpec, CloudScanRule, ResourceTag, ServerlessScanSpec};
use crate::schema::{
    AgentlessScanSchema, CloudScanRuleSchema, ResourceTagSchema, ServerlessScanSchema,
};

impl From<ResourceTagSchema> for ResourceTag {
    fn from(s: ResourceTagSchema) -> Self {
        Self {
            key: s.key,
            value: s.value,
        }
    }
}

impl From<&ResourceTag> for ResourceTagSchema {
    fn from(t: &ResourceTag) -> Self {
        Self {
            key: t.key.clone(),
            value: t.value.clone(),
        }
    }
}

impl From<AgentlessScanSchema> for AgentlessScanSpec {
    fn from(s: AgentlessScanSchema) -> Self {
        Self {
            enabled: s.enabled,
            auto_scale: s.auto_scale,
            hub_account: s.hub_account,
            hub_credential_id: s.hub_credential_id,
            included_tags: map_into(s.included_tag),
            excluded_tags: map_into(s.excluded_tag),
            regions: s.regions,
            scanners: s.scanners,
            scan_non_running: s.scan_non_running,
            security_group: s.security_group,
            subnet: s.subnet,
            skip_permissions_check: s.skip_permissions_check,
        }
    }
}

impl From<&AgentlessScanSpec> for AgentlessScanSchema {
    fn from(a: &AgentlessScanSpec) -> Self {
        Self {
            enabled: a.enabled,
            auto_scale: a.auto_scale,
            hub_account: a.hub_account,
            hub_credential_id: a.hub_credential_id.clone(),
            included_tag: map_from(&a.included_tags),
            excluded_tag: map_from(&a.excluded_tags),
            regions: a.regions.clone(),
            scanners: a.scanners,
            scan_non_running: a.scan_non_running,
            security_group: a.security_group.clone(),
            subnet: a.subnet.clone(),
            skip_permissions_check: a.skip_permissions_check,
        }
    }
}

impl From<ServerlessScanSchema> for ServerlessScanSpec {
    fn from(s: ServerlessScanSchema) -> Self {
        Self {
            enabled: s.enabled,
            cap: s.cap,
            scan_all_versions: s.scan_all_versions,
            scan_layers: s.scan_layers,
        }
    }
}

impl From<&ServerlessScanSpec> for ServerlessScanSchema {
    fn from(s: &ServerlessScanSpec) -> Self {
        Self {
            enabled: s.enabled,
            cap: s.cap,
            scan_all_versions: s.scan_all_versions,
            scan_layers: s.scan_layers,
        }
    }
}

impl From<CloudScanRuleSchema> for CloudScanRule {
    fn from(s: CloudScanRuleSchema) -> Self {
        Self {
            credential_id: s.credential_id,
            credential: None,
            agentless_scan_spec: s.agentless_scan.unwrap_or_default().into(),
            serverless_scan_spec: s.serverless_scan.unwrap_or_default().into(),
            discovery_enabled: s.discovery_enabled,
            serverless_radar_enabled: s.serverless_radar_enabled,
            vm_tags_enabled: s.vm_tags_enabled,
        }
    }
}

impl From<&CloudScanRule> for CloudScanRuleSchema {
    fn from(r: &CloudScanRule) -> Self {
        Self {
            credential_id: r.credential_id.clone(),
            discovery_enabled: r.discovery_enabled,
            serverless_radar_enabled: r.serverless_radar_enabled,
            vm_tags_enabled: r.vm_tags_enabled,
            agentless_scan: block((&r.agentless_scan_spec).into()),
            serverless_scan: block((&r.serverless_scan_spec).into()),
        }
    }
}
