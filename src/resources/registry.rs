//! Registry scan settings
//!
//! A single settings object replaced as a whole; the specification list
//! keeps its order.

use async_trait::async_trait;

use super::Resource;
use crate::client::ComputeApi;
use crate::client::models::RegistrySettings;
use crate::error::Result;
use crate::schema::RegistrySettingsSchema;

const REGISTRY_ID: &str = "registry";

pub struct RegistrySettingsResource;

#[async_trait]
impl Resource for RegistrySettingsResource {
    type Schema = RegistrySettingsSchema;

    fn kind(&self) -> &'static str {
        "registry_settings"
    }

    fn key(&self, _schema: &Self::Schema) -> Option<String> {
        Some(REGISTRY_ID.to_string())
    }

    async fn create<C: ComputeApi>(&self, client: &C, schema: &Self::Schema) -> Result<String> {
        self.update(client, REGISTRY_ID, schema).await?;
        Ok(REGISTRY_ID.to_string())
    }

    async fn read<C: ComputeApi>(&self, client: &C, id: &str) -> Result<Option<Self::Schema>> {
        if id != REGISTRY_ID {
            return Ok(None);
        }
        let settings = client.get_registry_settings().await?;
        Ok(Some(RegistrySettingsSchema::from(&settings)))
    }

    async fn update<C: ComputeApi>(
        &self,
        client: &C,
        _id: &str,
        schema: &Self::Schema,
    ) -> Result<()> {
        client
            .put_registry_settings(&RegistrySettings::from(schema.clone()))
            .await
    }

    async fn delete<C: ComputeApi>(&self, client: &C, _id: &str) -> Result<()> {
        client
            .put_registry_settings(&RegistrySettings::default())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockComputeClient;
    use crate::client::models::RegistrySpecification;
    use crate::resources::Kind;
    use serde_json::json;

    #[tokio::test]
    async fn test_registry_replaces_whole_list() {
        let mock = MockComputeClient::new()
            .with_registry(RegistrySettings {
                specifications: vec![RegistrySpecification {
                    version: "2".to_string(),
                    registry: "old.example.com".to_string(),
                    ..Default::default()
                }],
            })
            .await;

        let spec = json!({
            "specification": [
                {"version": "aws", "registry": "b.example.com", "os": "linux"},
                {"version": "2", "registry": "a.example.com", "os": "linux"}
            ]
        });
        let (id, refreshed) = Kind::RegistrySettings
            .apply(&mock, None, &spec)
            .await
            .unwrap();

        assert_eq!(id, "registry");
        let registries: Vec<_> = refreshed["specification"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["registry"].as_str().unwrap())
            .collect();
        assert_eq!(registries, vec!["b.example.com", "a.example.com"]);
    }

    #[tokio::test]
    async fn test_registry_delete_clears_list() {
        let mock = MockComputeClient::new()
            .with_registry(RegistrySettings {
                specifications: vec![RegistrySpecification::default()],
            })
            .await;
        RegistrySettingsResource.delete(&mock, REGISTRY_ID).await.unwrap();

        let read = RegistrySettingsResource
            .read(&mock, REGISTRY_ID)
            .await
            .unwrap()
            .unwrap();
        assert!(read.specification.is_empty());
    }
}
