//! Group, user and role schemas

use serde::{Deserialize, Serialize};

use super::{AUTH_TYPES, SchemaResult, Validate, one_of, required};

/// Collections a principal can see, optionally scoped to a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PermissionSchema {
    pub collections: Vec<String>,
    pub project: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GroupSchema {
    pub name: String,
    pub role: String,
    pub ldap_group: bool,
    pub oauth_group: bool,
    pub oidc_group: bool,
    pub saml_group: bool,
    pub users: Vec<String>,
    pub permission: Vec<PermissionSchema>,
}

/// `password` is write-only and reads back empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserSchema {
    pub username: String,
    pub password: String,
    pub role: String,
    pub auth_type: String,
    pub permission: Vec<PermissionSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoleSchema {
    pub name: String,
    pub description: String,
    pub permission: Vec<RolePermissionSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RolePermissionSchema {
    pub name: String,
    pub read_write: bool,
}

impl Validate for GroupSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        required(path, "name", &self.name)
    }
}

impl Validate for UserSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        required(path, "username", &self.username)?;
        required(path, "role", &self.role)?;
        one_of(path, "auth_type", &self.auth_type, AUTH_TYPES)
    }
}

impl Validate for RoleSchema {
    fn validate(&self, path: &str) -> SchemaResult {
        required(path, "name", &self.name)?;
        for (i, perm) in self.permission.iter().enumerate() {
            required(&format!("{path}.permission[{i}]"), "name", &perm.name)?;
        }
        Ok(())
    }
}
