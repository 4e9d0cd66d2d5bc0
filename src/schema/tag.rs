//! Tag schema

use serde::{Deserialize, Serialize};

use super::{SchemaResult, Validate, required};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TagSchema {
    pub name: String,
    pub description: String,
    pub color: String,
    pub assignment: Vec<TagAssignmentSchema>,
}

/// A vulnerability the tag is assigned to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TagAssignmentSchema {
    pub id: String,
    pub package_name: String,
    pub resource_type: String,
    pub resources: Vec<String>,
    pub comment: String,
}

impl Validate for TagSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        required(path, "name", &self.name)?;
        for (i, assignment) in self.assignment.iter().enumerate() {
            required(&format!("{path}.assignment[{i}]"), "id", &assignment.id)?;
        }
        Ok(())
    }
}
