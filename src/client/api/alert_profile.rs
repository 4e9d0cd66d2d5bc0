//! Alert profile API trait

use async_trait::async_trait;

use crate::client::models::AlertProfile;
use crate::error::Result;

#[async_trait]
pub trait AlertProfileApi: Send + Sync {
    async fn list_alert_profiles(&self) -> Result<Vec<AlertProfile>>;

    /// Create or replace the profile with `profile.name`.
    async fn upsert_alert_profile(&self, profile: &AlertProfile) -> Result<()>;

    async fn delete_alert_profile(&self, name: &str) -> Result<()>;
}
