//! Conversions between schema trees and console API objects
//!
//! Each resource has `impl From<XSchema> for X` (schema to API) and
//! `impl From<&X> for XSchema` (API to schema). Both directions are pure.
//!
//! Conventions shared by every converter:
//! - An absent optional block becomes the block's schema default, which
//!   converts to the API's zero value. In the other direction a block whose
//!   converted value equals its schema default is dropped ([`block`]), so an
//!   absent block reads back absent.
//! - Absent and empty lists both become an empty `Vec`.
//! - Fields the console computes (ids, owners, timestamps) are dropped on the
//!   way in.

mod access;
mod admission;
mod alert_profile;
mod cloud_scan;
mod collection;
mod compliance;
mod credential;
mod custom_rule;
mod registry;
mod runtime;
mod tag;
mod waas;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::models::{Collection, Policy, PolicyKind};
use crate::error::{Result, SchemaError};
use crate::schema::{PolicySchema, Validate};

/// Read a schema tree from its generic form and validate it.
pub fn parse<S>(value: &Value) -> Result<S>
where
    S: DeserializeOwned + Validate,
{
    let schema = S::deserialize(value).map_err(|e| SchemaError::Shape(e.to_string()))?;
    schema.validate("")?;
    Ok(schema)
}

/// Generic form to API object: parse, validate, convert.
pub fn from_value<S, X>(value: &Value) -> Result<X>
where
    S: DeserializeOwned + Validate,
    X: From<S>,
{
    Ok(X::from(parse::<S>(value)?))
}

/// API object to generic form.
pub fn to_value<S, X>(object: &X) -> Result<Value>
where
    S: Serialize + for<'a> From<&'a X>,
{
    Ok(serde_json::to_value(S::from(object))?)
}

/// Keep a converted block only if it differs from the block's default.
pub fn block<S: Default + PartialEq>(schema: S) -> Option<S> {
    if schema == S::default() {
        None
    } else {
        Some(schema)
    }
}

pub(crate) fn map_into<A, B: From<A>>(items: Vec<A>) -> Vec<B> {
    items.into_iter().map(B::from).collect()
}

pub(crate) fn map_from<'a, A, B: From<&'a A>>(items: &'a [A]) -> Vec<B> {
    items.iter().map(B::from).collect()
}

/// Rule scopes are plain collection names in a schema.
pub(crate) fn collections(names: Vec<String>) -> Vec<Collection> {
    names.into_iter().map(Collection::named).collect()
}

pub(crate) fn collection_names(collections: &[Collection]) -> Vec<String> {
    collections.iter().map(|c| c.name.clone()).collect()
}

impl<RS> PolicySchema<RS> {
    /// Build the policy object for `kind`, keeping rule order.
    pub fn into_policy<R: From<RS>>(self, kind: PolicyKind) -> Policy<R> {
        Policy::new(kind, map_into(self.rule))
    }

    pub fn from_policy<R>(policy: &Policy<R>) -> Self
    where
        RS: for<'a> From<&'a R>,
    {
        Self {
            rule: map_from(&policy.rules),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::{AdmissionRule, Tag};
    use crate::error::Error;
    use crate::schema::{AdmissionRuleSchema, TagSchema};
    use serde_json::json;

    #[test]
    fn test_block_elides_default() {
        assert_eq!(block(String::new()), None);
        assert_eq!(block("x".to_string()), Some("x".to_string()));
    }

    #[test]
    fn test_from_value_shape_error() {
        let err = from_value::<TagSchema, Tag>(&json!({"name": 5})).unwrap_err();
        assert!(matches!(err, Error::Schema(SchemaError::Shape(_))));
    }

    #[test]
    fn test_from_value_runs_validation() {
        let err = from_value::<TagSchema, Tag>(&json!({"description": "no name"})).unwrap_err();
        assert!(matches!(err, Error::Schema(SchemaError::Required(_))));
    }

    #[test]
    fn test_to_value_is_idempotent() {
        let tag = Tag {
            name: "x".to_string(),
            description: "d".to_string(),
            ..Default::default()
        };
        let first = to_value::<TagSchema, Tag>(&tag).unwrap();
        let second = to_value::<TagSchema, Tag>(&tag).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_policy_keeps_rule_order() {
        let schema = PolicySchema {
            rule: ["c", "a", "b"]
                .iter()
                .map(|n| AdmissionRuleSchema {
                    name: n.to_string(),
                    ..Default::default()
                })
                .collect(),
        };

        let policy: Policy<AdmissionRule> = schema.clone().into_policy(PolicyKind::Admission);
        let names: Vec<_> = policy.rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
        assert_eq!(policy.policy_type, "admission");

        assert_eq!(PolicySchema::from_policy(&policy), schema);
    }

    #[test]
    fn test_collection_names_roundtrip() {
        let names = vec!["All".to_string(), "prod".to_string()];
        assert_eq!(collection_names(&collections(names.clone())), names);
    }
}
