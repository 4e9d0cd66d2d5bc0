//! Custom rule and custom compliance API trait

use async_trait::async_trait;

use crate::client::models::{CustomCompliance, CustomRule};
use crate::error::Result;

/// Script-backed rules with console-wide integer ids
///
/// Neither endpoint allocates ids; callers pick one (see
/// `resources::custom_rule::next_id`).
#[async_trait]
pub trait CustomRuleApi: Send + Sync {
    async fn list_custom_rules(&self) -> Result<Vec<CustomRule>>;

    /// Create or replace the custom rule with `rule.id`.
    async fn put_custom_rule(&self, rule: &CustomRule) -> Result<()>;

    async fn delete_custom_rule(&self, id: i32) -> Result<()>;

    async fn list_custom_compliance(&self) -> Result<Vec<CustomCompliance>>;

    /// Create or replace the check with `check.id`.
    async fn put_custom_compliance(&self, check: &CustomCompliance) -> Result<()>;

    async fn delete_custom_compliance(&self, id: i32) -> Result<()>;
}
