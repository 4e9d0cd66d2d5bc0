//! Credentials, keyed by name
//!
//! The console stores secrets encrypted and never returns the plain value,
//! so a refreshed credential gets its secrets from the declared schema.

use async_trait::async_trait;

use super::{Resource, find, found, keep_secret};
use crate::client::ComputeApi;
use crate::client::models::Credential;
use crate::error::Result;
use crate::schema::CredentialSchema;

pub struct CredentialResource;

#[async_trait]
impl Resource for CredentialResource {
    type Schema = CredentialSchema;

    fn kind(&self) -> &'static str {
        "credential"
    }

    fn key(&self, schema: &Self::Schema) -> Option<String> {
        Some(schema.name.clone())
    }

    async fn create<C: ComputeApi>(&self, client: &C, schema: &Self::Schema) -> Result<String> {
        let credential = Credential::from(schema.clone());
        client.upsert_credential(&credential).await?;
        Ok(credential.id)
    }

    async fn read<C: ComputeApi>(&self, client: &C, id: &str) -> Result<Option<Self::Schema>> {
        let credentials = client.list_credentials().await?;
        let credential = found(find(credentials, self.kind(), id, |c| c.id == id))?;
        Ok(credential.as_ref().map(CredentialSchema::from))
    }

    async fn update<C: ComputeApi>(
        &self,
        client: &C,
        _id: &str,
        schema: &Self::Schema,
    ) -> Result<()> {
        client
            .upsert_credential(&Credential::from(schema.clone()))
            .await
    }

    async fn delete<C: ComputeApi>(&self, client: &C, id: &str) -> Result<()> {
        client.delete_credential(id).await
    }

    fn carry_over(&self, declared: &Self::Schema, observed: &mut Self::Schema) {
        keep_secret(&declared.secret, &mut observed.secret);
        keep_secret(&declared.api_token, &mut observed.api_token);

        if let (Some(declared), Some(observed)) = (
            declared.temporary_token.as_ref(),
            observed.temporary_token.as_mut(),
        ) {
            keep_secret(
                &declared.aws_secret_access_key,
                &mut observed.aws_secret_access_key,
            );
            keep_secret(&declared.token, &mut observed.token);
        }
    }
}
