//! Compute console API client

#[cfg(test)]
pub mod mock;

pub mod api;
pub mod compute;
pub mod models;

pub use api::{
    AccessApi, AlertProfileApi, CloudScanRuleApi, CollectionApi, CredentialApi, CustomRuleApi,
    PolicyApi, SettingsApi, TagApi,
};
pub use compute::ComputeClient;

#[cfg(test)]
pub use mock::MockComputeClient;

/// Full console API surface
///
/// Resource lifecycle code is generic over this trait so the HTTP client and
/// the in-memory mock are interchangeable.
pub trait ComputeApi:
    PolicyApi
    + AlertProfileApi
    + CredentialApi
    + CloudScanRuleApi
    + CustomRuleApi
    + TagApi
    + AccessApi
    + SettingsApi
    + CollectionApi
{
}

impl<T> ComputeApi for T where
    T: PolicyApi
        + AlertProfileApi
        + CredentialApi
        + CloudScanRuleApi
        + CustomRuleApi
        + TagApi
        + AccessApi
        + SettingsApi
        + CollectionApi
{
}
