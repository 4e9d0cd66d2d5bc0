//! Credential API trait

use async_trait::async_trait;

use crate::client::models::Credential;
use crate::error::Result;

#[async_trait]
pub trait CredentialApi: Send + Sync {
    async fn list_credentials(&self) -> Result<Vec<Credential>>;

    /// Create or replace the credential with `credential.id`.
    async fn upsert_credential(&self, credential: &Credential) -> Result<()>;

    async fn delete_credential(&self, id: &str) -> Result<()>;
}
