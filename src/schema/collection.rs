//! Collection data source schema
//!
//! Read-only: only `name` is taken from a document, everything else is
//! filled in from the console.

use serde::{Deserialize, Serialize};

use super::{SchemaResult, Validate, required};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CollectionSchema {
    pub name: String,
    pub description: String,
    pub color: String,
    pub account_ids: Vec<String>,
    pub app_ids: Vec<String>,
    pub clusters: Vec<String>,
    pub code_repos: Vec<String>,
    pub containers: Vec<String>,
    pub functions: Vec<String>,
    pub hosts: Vec<String>,
    pub images: Vec<String>,
    pub labels: Vec<String>,
    pub namespaces: Vec<String>,
}

impl Validate for CollectionSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        required(path, "name", &self.name)
    }
}
