use async_trait::async_trait;

use super::{Resource, find, found};
use crate::client::ComputeApi;
use crate::client::models::AlertProfile;
use crate::error::Result;
use crate::schema::AlertProfileSchema;

/// Alert profiles, keyed by name
pub struct AlertProfileResource;

#[async_trait]
impl Resource for AlertProfileResource {
    type Schema = AlertProfileSchema;

    fn kind(&self) -> &'static str {
        "alert_profile"
    }

    fn key(&self, schema: &Self::Schema) -> Option<String> {
        Some(schema.name.clone())
    }

    async fn create<C: ComputeApi>(&self, client: &C, schema: &Self::Schema) -> Result<String> {
        let profile = AlertProfile::from(schema.clone());
        client.upsert_alert_profile(&profile).await?;
        Ok(profile.name)
    }

    async fn read<C: ComputeApi>(&self, client: &C, id: &str) -> Result<Option<Self::Schema>> {
        let profiles = client.list_alert_profiles().await?;
        let profile = found(find(profiles, self.kind(), id, |p| p.name == id))?;
        Ok(profile.as_ref().map(AlertProfileSchema::from))
    }

    async fn update<C: ComputeApi>(
        &self,
        client: &C,
        _id: &str,
        schema: &Self::Schema,
    ) -> Result<()> {
        client
            .upsert_alert_profile(&AlertProfile::from(schema.clone()))
            .await
    }

    async fn delete<C: ComputeApi>(&self, client: &C, id: &str) -> Result<()> {
        client.delete_alert_profile(id).await
    }
}
