//! Policy API trait

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::models::{Policy, PolicyKind};
use crate::error::Result;

/// Singleton policy operations
///
/// Policies have no create or delete endpoint: the console always holds
/// exactly one policy per kind, replaced as a whole by `update_policy`.
#[async_trait]
pub trait PolicyApi: Send + Sync {
    /// Fetch the current policy of the given kind.
    async fn get_policy<R>(&self, kind: PolicyKind) -> Result<Policy<R>>
    where
        R: DeserializeOwned + Send + 'static;

    /// Replace the policy of the given kind, rules in order.
    async fn update_policy<R>(&self, kind: PolicyKind, policy: &Policy<R>) -> Result<()>
    where
        R: Serialize + Send + Sync;
}
