//! Singleton policies
//!
//! A policy always exists on the console, addressed by its type constant.
//! Create and update both replace the rule list; delete replaces it with an
//! empty one.

use std::marker::PhantomData;

use async_trait::async_trait;
use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{Resource, keep_secret};
use crate::client::ComputeApi;
use crate::client::models::{Policy, PolicyKind};
use crate::error::Result;
use crate::schema::{
    AdmissionRuleSchema, ComplianceRuleSchema, PolicySchema, RuntimeContainerRuleSchema,
    RuntimeHostRuleSchema, Validate, WaasRuleSchema,
};

/// Rule schemas holding write-only values the console reads back blank.
pub trait RuleSecrets {
    /// Copy declared secrets into the matching observed rule.
    fn keep_secrets(&self, _observed: &mut Self) {}
}

impl RuleSecrets for AdmissionRuleSchema {}
impl RuleSecrets for ComplianceRuleSchema {}
impl RuleSecrets for RuntimeContainerRuleSchema {}
impl RuleSecrets for RuntimeHostRuleSchema {}

impl RuleSecrets for WaasRuleSchema {
    fn keep_secrets(&self, observed: &mut Self) {
        if self.name != observed.name {
            return;
        }
        for (declared, app) in self.application.iter().zip(observed.application.iter_mut()) {
            let declared = declared
                .bot_protection
                .as_ref()
                .and_then(|b| b.active_bot_detection.as_ref())
                .and_then(|a| a.recaptcha.as_ref());
            let observed = app
                .bot_protection
                .as_mut()
                .and_then(|b| b.active_bot_detection.as_mut())
                .and_then(|a| a.recaptcha.as_mut());
            if let (Some(declared), Some(observed)) = (declared, observed) {
                keep_secret(&declared.secret_key, &mut observed.secret_key);
            }
        }
    }
}

/// One policy family: `S` is its rule schema, `R` its console rule type.
pub struct PolicyResource<S, R> {
    name: &'static str,
    kind: PolicyKind,
    rules: PhantomData<fn() -> (S, R)>,
}

impl<S, R> PolicyResource<S, R> {
    pub fn new(name: &'static str, kind: PolicyKind) -> Self {
        Self {
            name,
            kind,
            rules: PhantomData,
        }
    }
}

#[async_trait]
impl<S, R> Resource for PolicyResource<S, R>
where
    S: Serialize + DeserializeOwned + Validate + RuleSecrets + Default + Clone + Send + Sync + 'static,
    S: for<'a> From<&'a R>,
    R: From<S> + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    type Schema = PolicySchema<S>;

    fn kind(&self) -> &'static str {
        self.name
    }

    fn key(&self, _schema: &Self::Schema) -> Option<String> {
        Some(self.kind.policy_type().to_string())
    }

    async fn create<C: ComputeApi>(&self, client: &C, schema: &Self::Schema) -> Result<String> {
        self.update(client, self.kind.policy_type(), schema).await?;
        Ok(self.kind.policy_type().to_string())
    }

    async fn read<C: ComputeApi>(&self, client: &C, id: &str) -> Result<Option<Self::Schema>> {
        if id != self.kind.policy_type() {
            debug!("{} is not the {} policy", id, self.kind);
            return Ok(None);
        }
        let policy: Policy<R> = client.get_policy(self.kind).await?;
        Ok(Some(PolicySchema::from_policy(&policy)))
    }

    async fn update<C: ComputeApi>(
        &self,
        client: &C,
        _id: &str,
        schema: &Self::Schema,
    ) -> Result<()> {
        let policy: Policy<R> = schema.clone().into_policy(self.kind);
        debug!("Writing {} policy with {} rules", self.kind, policy.rules.len());
        client.update_policy(self.kind, &policy).await
    }

    async fn delete<C: ComputeApi>(&self, client: &C, _id: &str) -> Result<()> {
        let empty: Policy<R> = Policy::new(self.kind, Vec::new());
        client.update_policy(self.kind, &empty).await
    }

    /// Rules are written in order, so declared and observed pair up by position.
    fn carry_over(&self, declared: &Self::Schema, observed: &mut Self::Schema) {
        for (declared, observed) in declared.rule.iter().zip(observed.rule.iter_mut()) {
            declared.keep_secrets(observed);
        }
    }
}
