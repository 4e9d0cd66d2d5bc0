//! Collection API trait

use async_trait::async_trait;

use crate::client::models::Collection;
use crate::error::Result;

#[async_trait]
pub trait CollectionApi: Send + Sync {
    async fn list_collections(&self) -> Result<Vec<Collection>>;
}
