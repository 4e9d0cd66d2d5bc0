//! In-memory Compute console for testing
//!
//! Implements every API trait against shared state so lifecycle code can be
//! exercised without HTTP. Writes are applied the way the console applies
//! them (replace by key, append otherwise), and every call is logged.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{
    AccessApi, AlertProfileApi, CloudScanRuleApi, CollectionApi, CredentialApi, CustomRuleApi,
    PolicyApi, SettingsApi, TagApi,
};
use super::models::{
    AlertProfile, CloudScanRule, Collection, Credential, CustomCompliance, CustomRule, Group,
    Policy, PolicyKind, RegistrySettings, Role, Secret, Tag, TagVuln, User,
};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Seed state via builder methods, run lifecycle code against it, then
/// inspect state and the call log.
///
/// # Example
/// ```ignore
/// let mock = MockComputeClient::new()
///     .with_tags(vec![Tag { name: "ops".into(), ..Default::default() }])
///     .await;
///
/// let tags = mock.list_tags().await?;
/// assert_eq!(tags.len(), 1);
/// ```
#[derive(Default)]
pub struct MockComputeClient {
    /// Policies keyed by family, stored untyped so one map serves every rule type
    policies: Arc<Mutex<HashMap<PolicyKind, serde_json::Value>>>,
    alert_profiles: Arc<Mutex<Vec<AlertProfile>>>,
    credentials: Arc<Mutex<Vec<Credential>>>,
    cloud_scan_rules: Arc<Mutex<Vec<CloudScanRule>>>,
    custom_rules: Arc<Mutex<Vec<CustomRule>>>,
    custom_compliance: Arc<Mutex<Vec<CustomCompliance>>>,
    tags: Arc<Mutex<Vec<Tag>>>,
    groups: Arc<Mutex<Vec<Group>>>,
    users: Arc<Mutex<Vec<User>>>,
    roles: Arc<Mutex<Vec<Role>>>,
    registry: Arc<Mutex<RegistrySettings>>,
    collections: Arc<Mutex<Vec<Collection>>>,
    /// Error to return from the next call to a named method (consumed on use)
    failures: Arc<Mutex<HashMap<String, ApiError>>>,
    /// Method names in call order
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockComputeClient {
    /// Create a mock console with empty state.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_policy<R: Serialize>(self, kind: PolicyKind, policy: &Policy<R>) -> Self {
        let value = serde_json::to_value(policy).unwrap_or_default();
        self.policies.lock().await.insert(kind, value);
        self
    }

    pub async fn with_alert_profiles(self, profiles: Vec<AlertProfile>) -> Self {
        *self.alert_profiles.lock().await = profiles;
        self
    }

    pub async fn with_credentials(self, credentials: Vec<Credential>) -> Self {
        *self.credentials.lock().await = credentials;
        self
    }

    pub async fn with_cloud_scan_rules(self, rules: Vec<CloudScanRule>) -> Self {
        *self.cloud_scan_rules.lock().await = rules;
        self
    }

    pub async fn with_custom_rules(self, rules: Vec<CustomRule>) -> Self {
        *self.custom_rules.lock().await = rules;
        self
    }

    pub async fn with_custom_compliance(self, checks: Vec<CustomCompliance>) -> Self {
        *self.custom_compliance.lock().await = checks;
        self
    }

    pub async fn with_tags(self, tags: Vec<Tag>) -> Self {
        *self.tags.lock().await = tags;
        self
    }

    pub async fn with_groups(self, groups: Vec<Group>) -> Self {
        *self.groups.lock().await = groups;
        self
    }

    pub async fn with_users(self, users: Vec<User>) -> Self {
        *self.users.lock().await = users;
        self
    }

    pub async fn with_roles(self, roles: Vec<Role>) -> Self {
        *self.roles.lock().await = roles;
        self
    }

    pub async fn with_registry(self, settings: RegistrySettings) -> Self {
        *self.registry.lock().await = settings;
        self
    }

    pub async fn with_collections(self, collections: Vec<Collection>) -> Self {
        *self.collections.lock().await = collections;
        self
    }

    /// Make the next call to `method` fail with `error`.
    pub async fn with_failure(self, method: &str, error: ApiError) -> Self {
        self.failures.lock().await.insert(method.to_string(), error);
        self
    }

    /// Method names called so far, in order.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    /// Number of times `method` was called.
    pub async fn call_count(&self, method: &str) -> usize {
        self.calls
            .lock()
            .await
            .iter()
            .filter(|c| c.as_str() == method)
            .count()
    }

    pub async fn tags(&self) -> Vec<Tag> {
        self.tags.lock().await.clone()
    }

    pub async fn custom_rules(&self) -> Vec<CustomRule> {
        self.custom_rules.lock().await.clone()
    }

    pub async fn custom_compliance(&self) -> Vec<CustomCompliance> {
        self.custom_compliance.lock().await.clone()
    }

    pub async fn policy_value(&self, kind: PolicyKind) -> Option<serde_json::Value> {
        self.policies.lock().await.get(&kind).cloned()
    }

    /// Log the call, then return the injected failure for it if any.
    async fn enter(&self, method: &str) -> Result<()> {
        self.calls.lock().await.push(method.to_string());

        if let Some(e) = self.failures.lock().await.remove(method) {
            return Err(e.into());
        }

        Ok(())
    }
}

/// Secrets come back encrypted, never plain.
fn seal(secret: &mut Secret) {
    if !secret.plain.is_empty() {
        secret.encrypted = format!("sealed:{}", secret.plain.len());
        secret.plain.clear();
    }
}

/// Seal every `secretKey` object inside an untyped policy.
fn seal_json(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, inner) in map.iter_mut() {
                if key == "secretKey" {
                    if let Ok(mut secret) = serde_json::from_value::<Secret>(inner.clone()) {
                        seal(&mut secret);
                        *inner = serde_json::to_value(secret).unwrap_or_default();
                    }
                } else {
                    seal_json(inner);
                }
            }
        }
        serde_json::Value::Array(items) => items.iter_mut().for_each(seal_json),
        _ => {}
    }
}

/// Replace the first item matching `same`, or append.
fn upsert<T: Clone>(items: &mut Vec<T>, item: &T, same: impl Fn(&T) -> bool) {
    match items.iter_mut().find(|i| same(i)) {
        Some(existing) => *existing = item.clone(),
        None => items.push(item.clone()),
    }
}

// ============================================================================
// PolicyApi Implementation
// ============================================================================

#[async_trait]
impl PolicyApi for MockComputeClient {
    async fn get_policy<R>(&self, kind: PolicyKind) -> Result<Policy<R>>
    where
        R: DeserializeOwned + Send + 'static,
    {
        self.enter("get_policy").await?;

        match self.policies.lock().await.get(&kind) {
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| ApiError::InvalidResponse(e.to_string()).into()),
            None => Ok(Policy::default()),
        }
    }

    async fn update_policy<R>(&self, kind: PolicyKind, policy: &Policy<R>) -> Result<()>
    where
        R: Serialize + Send + Sync,
    {
        self.enter("update_policy").await?;

        let mut value =
            serde_json::to_value(policy).map_err(|e| ApiError::Serialize(e.to_string()))?;
        seal_json(&mut value);
        self.policies.lock().await.insert(kind, value);
        Ok(())
    }
}

// ============================================================================
// AlertProfileApi Implementation
// ============================================================================

#[async_trait]
impl AlertProfileApi for MockComputeClient {
    async fn list_alert_profiles(&self) -> Result<Vec<AlertProfile>> {
        self.enter("list_alert_profiles").await?;
        Ok(self.alert_profiles.lock().await.clone())
    }

    async fn upsert_alert_profile(&self, profile: &AlertProfile) -> Result<()> {
        self.enter("upsert_alert_profile").await?;
        let mut profiles = self.alert_profiles.lock().await;
        upsert(&mut profiles, profile, |p| p.name == profile.name);
        Ok(())
    }

    async fn delete_alert_profile(&self, name: &str) -> Result<()> {
        self.enter("delete_alert_profile").await?;
        self.alert_profiles.lock().await.retain(|p| p.name != name);
        Ok(())
    }
}

// ============================================================================
// CredentialApi Implementation
// ============================================================================

#[async_trait]
impl CredentialApi for MockComputeClient {
    async fn list_credentials(&self) -> Result<Vec<Credential>> {
        self.enter("list_credentials").await?;
        Ok(self.credentials.lock().await.clone())
    }

    async fn upsert_credential(&self, credential: &Credential) -> Result<()> {
        self.enter("upsert_credential").await?;
        let mut stored = credential.clone();
        seal(&mut stored.secret);
        seal(&mut stored.api_token);
        if let Some(tokens) = stored.tokens.as_mut() {
            seal(&mut tokens.aws_secret_access_key);
            seal(&mut tokens.token);
        }
        let mut credentials = self.credentials.lock().await;
        upsert(&mut credentials, &stored, |c| c.id == stored.id);
        Ok(())
    }

    async fn delete_credential(&self, id: &str) -> Result<()> {
        self.enter("delete_credential").await?;
        self.credentials.lock().await.retain(|c| c.id != id);
        Ok(())
    }
}

// ============================================================================
// CloudScanRuleApi Implementation
// ============================================================================

#[async_trait]
impl CloudScanRuleApi for MockComputeClient {
    async fn list_cloud_scan_rules(&self) -> Result<Vec<CloudScanRule>> {
        self.enter("list_cloud_scan_rules").await?;
        Ok(self.cloud_scan_rules.lock().await.clone())
    }

    async fn create_cloud_scan_rule(&self, rule: &CloudScanRule) -> Result<()> {
        self.enter("create_cloud_scan_rule").await?;
        self.cloud_scan_rules.lock().await.push(rule.clone());
        Ok(())
    }

    async fn update_cloud_scan_rule(&self, rule: &CloudScanRule) -> Result<()> {
        self.enter("update_cloud_scan_rule").await?;
        let mut rules = self.cloud_scan_rules.lock().await;
        upsert(&mut rules, rule, |r| r.credential_id == rule.credential_id);
        Ok(())
    }

    async fn delete_cloud_scan_rule(&self, credential_id: &str) -> Result<()> {
        self.enter("delete_cloud_scan_rule").await?;
        self.cloud_scan_rules
            .lock()
            .await
            .retain(|r| r.credential_id != credential_id);
        Ok(())
    }
}

// ============================================================================
// CustomRuleApi Implementation
// ============================================================================

#[async_trait]
impl CustomRuleApi for MockComputeClient {
    async fn list_custom_rules(&self) -> Result<Vec<CustomRule>> {
        self.enter("list_custom_rules").await?;
        Ok(self.custom_rules.lock().await.clone())
    }

    async fn put_custom_rule(&self, rule: &CustomRule) -> Result<()> {
        self.enter("put_custom_rule").await?;
        let mut rules = self.custom_rules.lock().await;
        upsert(&mut rules, rule, |r| r.id == rule.id);
        Ok(())
    }

    async fn delete_custom_rule(&self, id: i32) -> Result<()> {
        self.enter("delete_custom_rule").await?;
        self.custom_rules.lock().await.retain(|r| r.id != id);
        Ok(())
    }

    async fn list_custom_compliance(&self) -> Result<Vec<CustomCompliance>> {
        self.enter("list_custom_compliance").await?;
        Ok(self.custom_compliance.lock().await.clone())
    }

    async fn put_custom_compliance(&self, check: &CustomCompliance) -> Result<()> {
        self.enter("put_custom_compliance").await?;
        let mut checks = self.custom_compliance.lock().await;
        upsert(&mut checks, check, |c| c.id == check.id);
        Ok(())
    }

    async fn delete_custom_compliance(&self, id: i32) -> Result<()> {
        self.enter("delete_custom_compliance").await?;
        self.custom_compliance.lock().await.retain(|c| c.id != id);
        Ok(())
    }
}

// ============================================================================
// TagApi Implementation
// ============================================================================

#[async_trait]
impl TagApi for MockComputeClient {
    async fn list_tags(&self) -> Result<Vec<Tag>> {
        self.enter("list_tags").await?;
        Ok(self.tags.lock().await.clone())
    }

    async fn create_tag(&self, tag: &Tag) -> Result<()> {
        self.enter("create_tag").await?;
        self.tags.lock().await.push(tag.clone());
        Ok(())
    }

    async fn update_tag(&self, name: &str, tag: &Tag) -> Result<()> {
        self.enter("update_tag").await?;
        let mut tags = self.tags.lock().await;
        match tags.iter_mut().find(|t| t.name == name) {
            Some(existing) => {
                existing.description = tag.description.clone();
                existing.color = tag.color.clone();
                Ok(())
            }
            None => Err(ApiError::Status { status: 404 }.into()),
        }
    }

    async fn delete_tag(&self, name: &str) -> Result<()> {
        self.enter("delete_tag").await?;
        self.tags.lock().await.retain(|t| t.name != name);
        Ok(())
    }

    async fn add_tag_vuln(&self, name: &str, vuln: &TagVuln) -> Result<()> {
        self.enter("add_tag_vuln").await?;
        let mut tags = self.tags.lock().await;
        match tags.iter_mut().find(|t| t.name == name) {
            Some(tag) => {
                tag.vulns.push(vuln.clone());
                Ok(())
            }
            None => Err(ApiError::Status { status: 404 }.into()),
        }
    }

    async fn remove_tag_vuln(&self, name: &str, vuln: &TagVuln) -> Result<()> {
        self.enter("remove_tag_vuln").await?;
        let mut tags = self.tags.lock().await;
        if let Some(tag) = tags.iter_mut().find(|t| t.name == name) {
            tag.vulns.retain(|v| v.id != vuln.id);
        }
        Ok(())
    }
}

// ============================================================================
// AccessApi Implementation
// ============================================================================

#[async_trait]
impl AccessApi for MockComputeClient {
    async fn list_groups(&self) -> Result<Vec<Group>> {
        self.enter("list_groups").await?;
        Ok(self.groups.lock().await.clone())
    }

    async fn create_group(&self, group: &Group) -> Result<()> {
        self.enter("create_group").await?;
        self.groups.lock().await.push(group.clone());
        Ok(())
    }

    async fn update_group(&self, name: &str, group: &Group) -> Result<()> {
        self.enter("update_group").await?;
        let mut groups = self.groups.lock().await;
        upsert(&mut groups, group, |g| g.group_name == name);
        Ok(())
    }

    async fn delete_group(&self, name: &str) -> Result<()> {
        self.enter("delete_group").await?;
        self.groups.lock().await.retain(|g| g.group_name != name);
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.enter("list_users").await?;
        Ok(self.users.lock().await.clone())
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        self.enter("create_user").await?;
        self.users.lock().await.push(User {
            password: String::new(),
            ..user.clone()
        });
        Ok(())
    }

    async fn update_user(&self, user: &User) -> Result<()> {
        self.enter("update_user").await?;
        let stored = User {
            password: String::new(),
            ..user.clone()
        };
        let mut users = self.users.lock().await;
        upsert(&mut users, &stored, |u| u.username == stored.username);
        Ok(())
    }

    async fn delete_user(&self, username: &str) -> Result<()> {
        self.enter("delete_user").await?;
        self.users.lock().await.retain(|u| u.username != username);
        Ok(())
    }

    async fn list_roles(&self) -> Result<Vec<Role>> {
        self.enter("list_roles").await?;
        Ok(self.roles.lock().await.clone())
    }

    async fn create_role(&self, role: &Role) -> Result<()> {
        self.enter("create_role").await?;
        self.roles.lock().await.push(role.clone());
        Ok(())
    }

    async fn update_role(&self, role: &Role) -> Result<()> {
        self.enter("update_role").await?;
        let mut roles = self.roles.lock().await;
        upsert(&mut roles, role, |r| r.name == role.name);
        Ok(())
    }

    async fn delete_role(&self, name: &str) -> Result<()> {
        self.enter("delete_role").await?;
        self.roles.lock().await.retain(|r| r.name != name);
        Ok(())
    }
}

// ============================================================================
// SettingsApi / CollectionApi Implementation
// ============================================================================

#[async_trait]
impl SettingsApi for MockComputeClient {
    async fn get_registry_settings(&self) -> Result<RegistrySettings> {
        self.enter("get_registry_settings").await?;
        Ok(self.registry.lock().await.clone())
    }

    async fn put_registry_settings(&self, settings: &RegistrySettings) -> Result<()> {
        self.enter("put_registry_settings").await?;
        *self.registry.lock().await = settings.clone();
        Ok(())
    }
}

#[async_trait]
impl CollectionApi for MockComputeClient {
    async fn list_collections(&self) -> Result<Vec<Collection>> {
        self.enter("list_collections").await?;
        Ok(self.collections.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::AdmissionRule;

    #[tokio::test]
    async fn test_mock_policy_roundtrip() {
        let mock = MockComputeClient::new();
        let policy = Policy::new(
            PolicyKind::Admission,
            vec![AdmissionRule {
                name: "r1".to_string(),
                ..Default::default()
            }],
        );

        mock.update_policy(PolicyKind::Admission, &policy)
            .await
            .unwrap();
        let read: Policy<AdmissionRule> = mock.get_policy(PolicyKind::Admission).await.unwrap();

        assert_eq!(read.rules.len(), 1);
        assert_eq!(read.policy_type, "admission");
    }

    #[tokio::test]
    async fn test_mock_unset_policy_is_empty() {
        let mock = MockComputeClient::new();
        let read: Policy<AdmissionRule> = mock.get_policy(PolicyKind::RuntimeHost).await.unwrap();
        assert!(read.rules.is_empty());
    }

    #[tokio::test]
    async fn test_mock_failure_is_consumed() {
        let mock = MockComputeClient::new()
            .with_failure("list_tags", ApiError::Status { status: 500 })
            .await;

        assert!(mock.list_tags().await.is_err());
        assert!(mock.list_tags().await.is_ok());
        assert_eq!(mock.call_count("list_tags").await, 2);
    }

    #[tokio::test]
    async fn test_mock_upsert_replaces_by_key() {
        let mock = MockComputeClient::new();
        let mut role = Role {
            name: "auditor".to_string(),
            ..Default::default()
        };
        mock.create_role(&role).await.unwrap();
        role.description = "read only".to_string();
        mock.update_role(&role).await.unwrap();

        let roles = mock.list_roles().await.unwrap();
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].description, "read only");
    }

    #[tokio::test]
    async fn test_mock_seals_credential_secrets() {
        let mock = MockComputeClient::new();
        let credential = Credential {
            id: "aws-prod".to_string(),
            secret: Secret::plain("s3cr3t"),
            ..Default::default()
        };
        mock.upsert_credential(&credential).await.unwrap();

        let stored = mock.list_credentials().await.unwrap();
        assert!(stored[0].secret.plain.is_empty());
        assert!(!stored[0].secret.encrypted.is_empty());
    }
}
