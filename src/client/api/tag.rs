//! Tag API trait

use async_trait::async_trait;

use crate::client::models::{Tag, TagVuln};
use crate::error::Result;

#[async_trait]
pub trait TagApi: Send + Sync {
    async fn list_tags(&self) -> Result<Vec<Tag>>;

    /// Create a tag. The console ignores `vulns` here; attach them with
    /// [`TagApi::add_tag_vuln`] afterwards.
    async fn create_tag(&self, tag: &Tag) -> Result<()>;

    /// Update name, description and color of the tag currently called `name`.
    async fn update_tag(&self, name: &str, tag: &Tag) -> Result<()>;

    async fn delete_tag(&self, name: &str) -> Result<()>;

    async fn add_tag_vuln(&self, name: &str, vuln: &TagVuln) -> Result<()>;

    async fn remove_tag_vuln(&self, name: &str, vuln: &TagVuln) -> Result<()>;
}
