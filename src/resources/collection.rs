//! Collections: a read-only data source looked up by name

use log::debug;
use serde_json::Value;

use super::{find, found};
use crate::client::ComputeApi;
use crate::error::Result;
use crate::schema::CollectionSchema;

pub(crate) const KIND: &str = "collection";

/// The named collection in generic form, `None` when there is none.
pub async fn read<C: ComputeApi>(client: &C, name: &str) -> Result<Option<Value>> {
    debug!("Looking up collection {}", name);
    let collections = client.list_collections().await?;
    let collection = found(find(collections, KIND, name, |c| c.name == name))?;
    Ok(collection
        .as_ref()
        .map(|c| serde_json::to_value(CollectionSchema::from(c)))
        .transpose()?)
}
