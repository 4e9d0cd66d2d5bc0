//! Resource lifecycle: create, read, update, delete and import per kind
//!
//! Each kind implements [`Resource`] against any [`ComputeApi`], so the same
//! code drives the HTTP client and the in-memory mock. The generic runners
//! below add what every kind shares: create-or-update on apply, a refresh
//! read after each mutation, and error context naming the kind and step.

mod access;
mod alert_profile;
mod cloud_scan;
mod collection;
mod credential;
mod custom_rule;
mod document;
mod kind;
mod policy;
mod registry;
mod tag;

pub use document::Document;
pub use kind::Kind;

use async_trait::async_trait;
use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::ComputeApi;
use crate::convert;
use crate::error::{ApiError, Error, Result};
use crate::schema::Validate;

/// Lifecycle of one resource kind
///
/// `Schema` is the document tree the kind reads and writes. Ids are strings
/// at this level whatever the console uses underneath.
#[async_trait]
pub trait Resource: Send + Sync {
    type Schema: Serialize + DeserializeOwned + Validate + Send + Sync + 'static;

    /// Kind name used in logs and error context
    fn kind(&self) -> &'static str;

    /// Id the schema itself determines, if any
    fn key(&self, schema: &Self::Schema) -> Option<String>;

    /// Create the object and return its id.
    async fn create<C: ComputeApi>(&self, client: &C, schema: &Self::Schema) -> Result<String>;

    /// Current state, or `None` when the object no longer exists.
    async fn read<C: ComputeApi>(&self, client: &C, id: &str) -> Result<Option<Self::Schema>>;

    async fn update<C: ComputeApi>(
        &self,
        client: &C,
        id: &str,
        schema: &Self::Schema,
    ) -> Result<()>;

    async fn delete<C: ComputeApi>(&self, client: &C, id: &str) -> Result<()>;

    /// Turn a user-supplied import id into a resource id.
    fn import_id(&self, raw: &str) -> Result<String> {
        Ok(raw.to_string())
    }

    /// Copy write-only values the console never returns from the declared
    /// schema into the observed one.
    fn carry_over(&self, _declared: &Self::Schema, _observed: &mut Self::Schema) {}
}

/// Create the object if absent, update it otherwise, then read it back.
///
/// Returns the id and the refreshed schema in generic form.
pub async fn apply<T, C>(
    resource: &T,
    client: &C,
    id: Option<&str>,
    spec: &Value,
) -> Result<(String, Value)>
where
    T: Resource,
    C: ComputeApi,
{
    let kind = resource.kind();
    let declared: T::Schema = convert::parse(spec)?;
    let id = id.map(str::to_string).or_else(|| resource.key(&declared));

    let existing = match &id {
        Some(id) => resource
            .read(client, id)
            .await
            .map_err(|e| e.in_resource(kind, "read"))?,
        None => None,
    };

    let id = match (id, existing) {
        (Some(id), Some(_)) => {
            debug!("Updating {} {}", kind, id);
            resource
                .update(client, &id, &declared)
                .await
                .map_err(|e| e.in_resource(kind, "update"))?;
            id
        }
        _ => {
            debug!("Creating {}", kind);
            let id = resource
                .create(client, &declared)
                .await
                .map_err(|e| e.in_resource(kind, "create"))?;
            debug!("Created {} {}", kind, id);
            id
        }
    };

    let mut observed = refresh(resource, client, &id).await?;
    resource.carry_over(&declared, &mut observed);
    Ok((id, serde_json::to_value(observed)?))
}

/// Current state in generic form, `None` when gone.
pub async fn read<T, C>(resource: &T, client: &C, id: &str) -> Result<Option<Value>>
where
    T: Resource,
    C: ComputeApi,
{
    debug!("Reading {} {}", resource.kind(), id);
    let schema = resource
        .read(client, id)
        .await
        .map_err(|e| e.in_resource(resource.kind(), "read"))?;
    Ok(schema.map(serde_json::to_value).transpose()?)
}

/// Resolve an import id and read the object it names.
pub async fn import<T, C>(resource: &T, client: &C, raw: &str) -> Result<(String, Value)>
where
    T: Resource,
    C: ComputeApi,
{
    let id = resource
        .import_id(raw)
        .map_err(|e| e.in_resource(resource.kind(), "import"))?;
    debug!("Importing {} {}", resource.kind(), id);
    let schema = refresh(resource, client, &id).await?;
    Ok((id, serde_json::to_value(schema)?))
}

pub async fn delete<T, C>(resource: &T, client: &C, id: &str) -> Result<()>
where
    T: Resource,
    C: ComputeApi,
{
    debug!("Deleting {} {}", resource.kind(), id);
    resource
        .delete(client, id)
        .await
        .map_err(|e| e.in_resource(resource.kind(), "delete"))
}

/// Read that must find the object.
async fn refresh<T, C>(resource: &T, client: &C, id: &str) -> Result<T::Schema>
where
    T: Resource,
    C: ComputeApi,
{
    let kind = resource.kind();
    match resource.read(client, id).await {
        Ok(Some(schema)) => Ok(schema),
        Ok(None) => {
            Err(Error::from(ApiError::NotFound(format!("{kind} {id}"))).in_resource(kind, "read"))
        }
        Err(e) => Err(e.in_resource(kind, "read")),
    }
}

/// Fill `observed` from `declared` when the console left it blank.
pub(crate) fn keep_secret(declared: &str, observed: &mut String) {
    if observed.is_empty() && !declared.is_empty() {
        *observed = declared.to_string();
    }
}

/// Scan a listing for one object; a miss is a not-found.
pub(crate) fn find<T>(
    items: Vec<T>,
    kind: &str,
    id: &str,
    matches: impl Fn(&T) -> bool,
) -> Result<T> {
    items
        .into_iter()
        .find(|item| matches(item))
        .ok_or_else(|| ApiError::NotFound(format!("{kind} {id}")).into())
}

/// Not-found reads as "gone"; any other error passes through.
pub(crate) fn found<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
