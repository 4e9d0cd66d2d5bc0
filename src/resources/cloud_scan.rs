use async_trait::async_trait;

use super::{Resource, find, found};
use crate::client::ComputeApi;
use crate::client::models::CloudScanRule;
use crate::error::Result;
use crate::schema::CloudScanRuleSchema;

/// Cloud account scan rules, keyed by the credential they scan with
pub struct CloudScanRuleResource;

#[async_trait]
impl Resource for CloudScanRuleResource {
    type Schema = CloudScanRuleSchema;

    fn kind(&self) -> &'static str {
        "cloud_scan_rule"
    }

    fn key(&self, schema: &Self::Schema) -> Option<String> {
        Some(schema.credential_id.clone())
    }

    async fn create<C: ComputeApi>(&self, client: &C, schema: &Self::Schema) -> Result<String> {
        let rule = CloudScanRule::from(schema.clone());
        client.create_cloud_scan_rule(&rule).await?;
        Ok(rule.credential_id)
    }

    async fn read<C: ComputeApi>(&self, client: &C, id: &str) -> Result<Option<Self::Schema>> {
        let rules = client.list_cloud_scan_rules().await?;
        let rule = found(find(rules, self.kind(), id, |r| r.credential_id == id))?;
        Ok(rule.as_ref().map(CloudScanRuleSchema::from))
    }

    async fn update<C: ComputeApi>(
        &self,
        client: &C,
        _id: &str,
        schema: &Self::Schema,
    ) -> Result<()> {
        client
            .update_cloud_scan_rule(&CloudScanRule::from(schema.clone()))
            .await
    }

    async fn delete<C: ComputeApi>(&self, client: &C, id: &str) -> Result<()> {
        client.delete_cloud_scan_rule(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockComputeClient;
    use crate::resources::Kind;
    use serde_json::json;

    #[tokio::test]
    async fn test_cloud_scan_rule_create_then_update() {
        let mock = MockComputeClient::new();
        let spec = json!({
            "credential_id": "aws-prod",
            "agentless_scan": [{"enabled": true, "regions": ["us-east-1"]}]
        });
        Kind::CloudScanRule.apply(&mock, None, &spec).await.unwrap();

        let spec = json!({
            "credential_id": "aws-prod",
            "agentless_scan": [{"enabled": true, "regions": ["us-east-1", "eu-west-1"]}]
        });
        let (_, refreshed) = Kind::CloudScanRule.apply(&mock, None, &spec).await.unwrap();

        assert_eq!(mock.call_count("create_cloud_scan_rule").await, 1);
        assert_eq!(mock.call_count("update_cloud_scan_rule").await, 1);
        assert_eq!(refreshed["agentless_scan"][0]["regions"][1], "eu-west-1");
    }

    #[tokio::test]
    async fn test_cloud_scan_rule_delete() {
        let mock = MockComputeClient::new()
            .with_cloud_scan_rules(vec![CloudScanRule {
                credential_id: "gcp".to_string(),
                ..Default::default()
            }])
            .await;
        CloudScanRuleResource.delete(&mock, "gcp").await.unwrap();
        assert!(CloudScanRuleResource.read(&mock, "gcp").await.unwrap().is_none());
    }
}
