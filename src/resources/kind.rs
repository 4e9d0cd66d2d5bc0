//! Resource kinds and dispatch from a kind name to its lifecycle

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::access::{GroupResource, RoleResource, UserResource};
use super::alert_profile::AlertProfileResource;
use super::cloud_scan::CloudScanRuleResource;
use super::collection;
use super::credential::CredentialResource;
use super::custom_rule::{CustomComplianceResource, CustomRuleResource};
use super::policy::PolicyResource;
use super::registry::RegistrySettingsResource;
use super::tag::TagResource;
use crate::client::ComputeApi;
use crate::client::models::{
    AdmissionRule, ComplianceRule, PolicyKind, RuntimeContainerRule, RuntimeHostRule, WaasRule,
};
use crate::error::{ApiError, Error, Result};
use crate::schema::{
    AdmissionRuleSchema, ComplianceRuleSchema, RuntimeContainerRuleSchema, RuntimeHostRuleSchema,
    WaasRuleSchema,
};

/// Every kind a resource document can name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Kind {
    AdmissionPolicy,
    ComplianceContainerPolicy,
    ComplianceHostPolicy,
    ComplianceCoderepoPolicy,
    RuntimeContainerPolicy,
    RuntimeHostPolicy,
    WaasContainerPolicy,
    AlertProfile,
    Credential,
    CloudScanRule,
    CustomRule,
    CustomCompliance,
    Tag,
    Group,
    User,
    Role,
    RegistrySettings,
    /// Read-only
    Collection,
}

/// Run `$body` with `$r` bound to the lifecycle of `$kind`. Collections have
/// no lifecycle and evaluate `$data` instead.
macro_rules! with_resource {
    ($kind:expr, $r:ident => $body:expr, collection => $data:expr) => {
        match $kind {
            Kind::AdmissionPolicy => {
                let $r = PolicyResource::<AdmissionRuleSchema, AdmissionRule>::new(
                    $kind.name(),
                    PolicyKind::Admission,
                );
                $body
            }
            Kind::ComplianceContainerPolicy => {
                let $r = PolicyResource::<ComplianceRuleSchema, ComplianceRule>::new(
                    $kind.name(),
                    PolicyKind::ComplianceContainer,
                );
                $body
            }
            Kind::ComplianceHostPolicy => {
                let $r = PolicyResource::<ComplianceRuleSchema, ComplianceRule>::new(
                    $kind.name(),
                    PolicyKind::ComplianceHost,
                );
                $body
            }
            Kind::ComplianceCoderepoPolicy => {
                let $r = PolicyResource::<ComplianceRuleSchema, ComplianceRule>::new(
                    $kind.name(),
                    PolicyKind::ComplianceCoderepo,
                );
                $body
            }
            Kind::RuntimeContainerPolicy => {
                let $r = PolicyResource::<RuntimeContainerRuleSchema, RuntimeContainerRule>::new(
                    $kind.name(),
                    PolicyKind::RuntimeContainer,
                );
                $body
            }
            Kind::RuntimeHostPolicy => {
                let $r = PolicyResource::<RuntimeHostRuleSchema, RuntimeHostRule>::new(
                    $kind.name(),
                    PolicyKind::RuntimeHost,
                );
                $body
            }
            Kind::WaasContainerPolicy => {
                let $r = PolicyResource::<WaasRuleSchema, WaasRule>::new(
                    $kind.name(),
                    PolicyKind::WaasContainer,
                );
                $body
            }
            Kind::AlertProfile => {
                let $r = AlertProfileResource;
                $body
            }
            Kind::Credential => {
                let $r = CredentialResource;
                $body
            }
            Kind::CloudScanRule => {
                let $r = CloudScanRuleResource;
                $body
            }
            Kind::CustomRule => {
                let $r = CustomRuleResource;
                $body
            }
            Kind::CustomCompliance => {
                let $r = CustomComplianceResource;
                $body
            }
            Kind::Tag => {
                let $r = TagResource;
                $body
            }
            Kind::Group => {
                let $r = GroupResource;
                $body
            }
            Kind::User => {
                let $r = UserResource;
                $body
            }
            Kind::Role => {
                let $r = RoleResource;
                $body
            }
            Kind::RegistrySettings => {
                let $r = RegistrySettingsResource;
                $body
            }
            Kind::Collection => $data,
        }
    };
}

impl Kind {
    /// Name as written in documents and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Kind::AdmissionPolicy => "admission_policy",
            Kind::ComplianceContainerPolicy => "compliance_container_policy",
            Kind::ComplianceHostPolicy => "compliance_host_policy",
            Kind::ComplianceCoderepoPolicy => "compliance_coderepo_policy",
            Kind::RuntimeContainerPolicy => "runtime_container_policy",
            Kind::RuntimeHostPolicy => "runtime_host_policy",
            Kind::WaasContainerPolicy => "waas_container_policy",
            Kind::AlertProfile => "alert_profile",
            Kind::Credential => "credential",
            Kind::CloudScanRule => "cloud_scan_rule",
            Kind::CustomRule => "custom_rule",
            Kind::CustomCompliance => "custom_compliance",
            Kind::Tag => "tag",
            Kind::Group => "group",
            Kind::User => "user",
            Kind::Role => "role",
            Kind::RegistrySettings => "registry_settings",
            Kind::Collection => "collection",
        }
    }

    /// What the id of this kind is
    pub fn id_hint(&self) -> &'static str {
        match self {
            Kind::AdmissionPolicy
            | Kind::ComplianceContainerPolicy
            | Kind::ComplianceHostPolicy
            | Kind::ComplianceCoderepoPolicy
            | Kind::RuntimeContainerPolicy
            | Kind::RuntimeHostPolicy
            | Kind::WaasContainerPolicy => "policy type",
            Kind::CloudScanRule => "credential id",
            Kind::CustomRule => "id (import: name:id)",
            Kind::CustomCompliance => "id",
            Kind::User => "username",
            Kind::RegistrySettings => "\"registry\"",
            _ => "name",
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, Kind::Collection)
    }

    pub fn all() -> &'static [Kind] {
        Kind::value_variants()
    }

    fn read_only(&self, op: &'static str) -> Error {
        Error::Other(format!("{} is read-only", self.name())).in_resource(self.name(), op)
    }

    /// Create or update from a document spec; returns id and refreshed spec.
    pub async fn apply<C: ComputeApi>(
        self,
        client: &C,
        id: Option<&str>,
        spec: &Value,
    ) -> Result<(String, Value)> {
        with_resource!(self, r => super::apply(&r, client, id, spec).await,
            collection => Err(self.read_only("apply")))
    }

    pub async fn read<C: ComputeApi>(self, client: &C, id: &str) -> Result<Option<Value>> {
        with_resource!(self, r => super::read(&r, client, id).await,
            collection => collection::read(client, id)
                .await
                .map_err(|e| e.in_resource(collection::KIND, "read")))
    }

    pub async fn import<C: ComputeApi>(self, client: &C, raw: &str) -> Result<(String, Value)> {
        with_resource!(self, r => super::import(&r, client, raw).await,
            collection => match self.read(client, raw).await? {
                Some(value) => Ok((raw.to_string(), value)),
                None => Err(Error::from(ApiError::NotFound(format!("collection {raw}")))
                    .in_resource(collection::KIND, "import")),
            })
    }

    pub async fn delete<C: ComputeApi>(self, client: &C, id: &str) -> Result<()> {
        with_resource!(self, r => super::delete(&r, client, id).await,
            collection => Err(self.read_only("delete")))
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
