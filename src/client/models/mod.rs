//! Compute console API data models
//!
//! Every struct mirrors the console's JSON 1:1. Fields the console treats as
//! `omitempty` are skipped when empty so request bodies match what the
//! console expects. Models are organized by resource family.

mod access;
mod admission;
mod alert_profile;
mod auth;
mod cloud_scan;
mod collection;
mod compliance;
mod credential;
mod custom_rule;
mod policy;
mod registry;
mod runtime;
mod tag;
mod waas;

pub use access::{Group, GroupUser, Permission, Role, RolePermission, User};
pub use admission::AdmissionRule;
pub use alert_profile::{AlertPolicy, AlertProfile, AlertTrigger, Webhook};
pub use auth::{AuthRequest, AuthResponse};
pub use cloud_scan::{AgentlessScanSpec, CloudScanRule, ResourceTag, ServerlessScanSpec};
pub use collection::Collection;
pub use compliance::{ComplianceCheck, ComplianceCondition, ComplianceRule};
pub use credential::{Credential, Secret, TemporaryToken};
pub use custom_rule::{CustomCompliance, CustomRule};
pub use policy::{Policy, PolicyKind};
pub use registry::{RegistrySettings, RegistrySpecification};
pub use runtime::{
    ContainerDns, ContainerFilesystem, ContainerNetwork, ContainerProcesses, DeniedProcesses,
    FileIntegrityRule, HostAntiMalware, HostDns, HostForensic, HostNetwork, LogInspectionRule,
    PortRange, RuntimeContainerRule, RuntimeCustomRule, RuntimeHostRule,
};
pub use tag::{Tag, TagVuln};
pub use waas::{
    AccessControls, ApiMethod, ApiParameter, ApiPath, ApiSpec, BodyConfig, BotProtectionSpec,
    CustomBlockResponse, DosConfig, DosMatchCondition, Endpoint, ExceptionField, HeaderSpec,
    HstsConfig, IntelGathering, JsInjectionSpec, KnownBotProtections, MaliciousUpload, MatchRate,
    NetworkControls, ProtectionConfig, RecaptchaSpec, RequestAnomalies, StatusCodeRange,
    TlsConfig, UnknownBotProtection, UserDefinedBot, WaasApplication, WaasRule,
};

/// Policy aliases, one per family
pub type AdmissionPolicy = Policy<AdmissionRule>;
pub type CompliancePolicy = Policy<ComplianceRule>;
pub type RuntimeContainerPolicy = Policy<RuntimeContainerRule>;
pub type RuntimeHostPolicy = Policy<RuntimeHostRule>;
pub type WaasPolicy = Policy<WaasRule>;

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

pub(crate) fn is_zero(value: &i32) -> bool {
    *value == 0
}
