//! API trait definitions split by responsibility
//!
//! This module organizes the console API surface into focused sub-traits,
//! one per resource family:
//! - [`PolicyApi`] - Singleton policies (admission, compliance, runtime, WAAS)
//! - [`AlertProfileApi`] - Alert profiles
//! - [`CredentialApi`] - Credential store
//! - [`CloudScanRuleApi`] - Cloud account scan rules
//! - [`CustomRuleApi`] - Custom rules and custom compliance checks
//! - [`TagApi`] - Tags and their vulnerability assignments
//! - [`AccessApi`] - Groups, users and roles
//! - [`SettingsApi`] - Registry scan settings
//! - [`CollectionApi`] - Collections (read-only)
//!
//! The [`ComputeApi`](super::ComputeApi) super-trait combines all of them.

mod access;
mod alert_profile;
mod cloud_scan;
mod collection;
mod credential;
mod custom_rule;
mod policy;
mod settings;
mod tag;

pub use access::AccessApi;
pub use alert_profile::AlertProfileApi;
pub use cloud_scan::CloudScanRuleApi;
pub use collection::CollectionApi;
pub use credential::CredentialApi;
pub use custom_rule::CustomRuleApi;
pub use policy::PolicyApi;
pub use settings::SettingsApi;
pub use tag::TagApi;
