//! Cloud scan rule API trait

use async_trait::async_trait;

use crate::client::models::CloudScanRule;
use crate::error::Result;

/// Cloud account scan rules, keyed by credential id
#[async_trait]
pub trait CloudScanRuleApi: Send + Sync {
    async fn list_cloud_scan_rules(&self) -> Result<Vec<CloudScanRule>>;

    async fn create_cloud_scan_rule(&self, rule: &CloudScanRule) -> Result<()>;

    async fn update_cloud_scan_rule(&self, rule: &CloudScanRule) -> Result<()>;

    async fn delete_cloud_scan_rule(&self, credential_id: &str) -> Result<()>;
}
