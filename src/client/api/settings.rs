//! Settings API trait

use async_trait::async_trait;

use crate::client::models::RegistrySettings;
use crate::error::Result;

#[async_trait]
pub trait SettingsApi: Send + Sync {
    async fn get_registry_settings(&self) -> Result<RegistrySettings>;

    /// Replace the whole specification list.
    async fn put_registry_settings(&self, settings: &RegistrySettings) -> Result<()>;
}
