//! Resource documents as read from `apply -f`
//!
//! A document names a kind, optionally an id, and carries the schema tree as
//! `spec`. Files hold either JSON (one object or an array of them) or a YAML
//! stream with one document per `---` section.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Kind;
use crate::error::{ConfigError, Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    pub kind: Kind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub spec: Value,
}

impl Document {
    pub fn new(kind: Kind, id: Option<String>, spec: Value) -> Self {
        Self { kind, id, spec }
    }

    /// Parse every document in `text`. Empty YAML sections are skipped.
    pub fn parse_all(text: &str) -> Result<Vec<Document>> {
        let trimmed = text.trim_start();
        if trimmed.starts_with('{') {
            return Ok(vec![serde_json::from_str(trimmed)?]);
        }
        if trimmed.starts_with('[') {
            return Ok(serde_json::from_str(trimmed)?);
        }

        let mut documents = Vec::new();
        for section in serde_yaml::Deserializer::from_str(text) {
            let value = serde_yaml::Value::deserialize(section)?;
            if value.is_null() {
                continue;
            }
            documents.push(serde_yaml::from_value(value)?);
        }
        if documents.is_empty() {
            return Err(Error::Config(ConfigError::Invalid(
                "no resource documents found".to_string(),
            )));
        }
        Ok(documents)
    }
}
