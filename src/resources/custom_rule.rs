//! Custom runtime rules and custom compliance checks
//!
//! Both are keyed by a numeric id. A document without an id adopts the id of
//! an existing object with the same name, so re-applying it updates in place.
//! A new name gets one past the largest id currently on the console. Two
//! clients creating at the same time can pick the same id; the later write
//! replaces the earlier one.

use async_trait::async_trait;
use log::debug;

use super::{Resource, find, found};
use crate::client::ComputeApi;
use crate::client::models::{CustomCompliance, CustomRule};
use crate::error::{ApiError, Result, SchemaError};
use crate::schema::{CustomComplianceSchema, CustomRuleSchema};

/// Next free id: max + 1, or 1 when there are none.
pub fn next_id(ids: impl IntoIterator<Item = i32>) -> Result<i32> {
    match ids.into_iter().max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or_else(|| {
            ApiError::InvalidResponse(format!("no free id above {max}")).into()
        }),
    }
}

/// Id of the object named `name`, or a fresh one.
fn id_for<'a>(
    name: &str,
    existing: impl IntoIterator<Item = (&'a str, i32)> + Clone,
) -> Result<i32> {
    match existing.clone().into_iter().find(|(n, _)| *n == name) {
        Some((_, id)) => Ok(id),
        None => next_id(existing.into_iter().map(|(_, id)| id)),
    }
}

fn numeric_id(raw: &str) -> Result<i32> {
    raw.parse::<i32>().map_err(|_| {
        SchemaError::InvalidImportId(raw.to_string(), "expected a numeric id".to_string()).into()
    })
}

/// Declared id when set, otherwise `None` so the rule gets a fresh one.
fn declared_id(id: i32) -> Option<String> {
    (id != 0).then(|| id.to_string())
}

pub struct CustomRuleResource;

#[async_trait]
impl Resource for CustomRuleResource {
    type Schema = CustomRuleSchema;

    fn kind(&self) -> &'static str {
        "custom_rule"
    }

    fn key(&self, schema: &Self::Schema) -> Option<String> {
        declared_id(schema.id)
    }

    async fn create<C: ComputeApi>(&self, client: &C, schema: &Self::Schema) -> Result<String> {
        let mut rule = CustomRule::from(schema.clone());
        if rule.id == 0 {
            let existing = client.list_custom_rules().await?;
            rule.id = id_for(&rule.name, existing.iter().map(|r| (r.name.as_str(), r.id)))?;
            debug!("Using custom rule id {} for {}", rule.id, rule.name);
        }
        client.put_custom_rule(&rule).await?;
        Ok(rule.id.to_string())
    }

    async fn read<C: ComputeApi>(&self, client: &C, id: &str) -> Result<Option<Self::Schema>> {
        let wanted = numeric_id(id)?;
        let rules = client.list_custom_rules().await?;
        let rule = found(find(rules, self.kind(), id, |r| r.id == wanted))?;
        Ok(rule.as_ref().map(CustomRuleSchema::from))
    }

    async fn update<C: ComputeApi>(
        &self,
        client: &C,
        id: &str,
        schema: &Self::Schema,
    ) -> Result<()> {
        let mut rule = CustomRule::from(schema.clone());
        rule.id = numeric_id(id)?;
        client.put_custom_rule(&rule).await
    }

    async fn delete<C: ComputeApi>(&self, client: &C, id: &str) -> Result<()> {
        client.delete_custom_rule(numeric_id(id)?).await
    }

    /// Import ids take the form `name:id`; the id part addresses the rule.
    fn import_id(&self, raw: &str) -> Result<String> {
        let invalid =
            |reason: &str| SchemaError::InvalidImportId(raw.to_string(), reason.to_string());

        let (name, id) = raw
            .rsplit_once(':')
            .ok_or_else(|| invalid("expected <name>:<id>"))?;
        if name.is_empty() {
            return Err(invalid("name is empty").into());
        }
        match id.parse::<i32>() {
            Ok(id) if id > 0 => Ok(id.to_string()),
            _ => Err(invalid("id must be a positive number").into()),
        }
    }
}

pub struct CustomComplianceResource;

#[async_trait]
impl Resource for CustomComplianceResource {
    type Schema = CustomComplianceSchema;

    fn kind(&self) -> &'static str {
        "custom_compliance"
    }

    fn key(&self, schema: &Self::Schema) -> Option<String> {
        declared_id(schema.id)
    }

    async fn create<C: ComputeApi>(&self, client: &C, schema: &Self::Schema) -> Result<String> {
        let mut check = CustomCompliance::from(schema.clone());
        if check.id == 0 {
            let existing = client.list_custom_compliance().await?;
            check.id = id_for(&check.name, existing.iter().map(|c| (c.name.as_str(), c.id)))?;
            debug!("Using custom compliance id {} for {}", check.id, check.name);
        }
        client.put_custom_compliance(&check).await?;
        Ok(check.id.to_string())
    }

    async fn read<C: ComputeApi>(&self, client: &C, id: &str) -> Result<Option<Self::Schema>> {
        let wanted = numeric_id(id)?;
        let checks = client.list_custom_compliance().await?;
        let check = found(find(checks, self.kind(), id, |c| c.id == wanted))?;
        Ok(check.as_ref().map(CustomComplianceSchema::from))
    }

    async fn update<C: ComputeApi>(
        &self,
        client: &C,
        id: &str,
        schema: &Self::Schema,
    ) -> Result<()> {
        let mut check = CustomCompliance::from(schema.clone());
        check.id = numeric_id(id)?;
        client.put_custom_compliance(&check).await
    }

    async fn delete<C: ComputeApi>(&self, client: &C, id: &str) -> Result<()> {
        client.delete_custom_compliance(numeric_id(id)?).await
    }
}
