//! Access management models: groups, users, roles

use serde::{Deserialize, Serialize};

use super::is_false;

/// Collections a principal may access within a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collections: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(default, rename = "_id", skip_serializing_if = "String::is_empty")]
    pub id: String,

    pub group_name: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub ldap_group: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub oauth_group: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub oidc_group: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub saml_group: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub role: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<Permission>,

    #[serde(default, rename = "user", skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<GroupUser>,

    #[serde(default, skip_serializing)]
    pub last_modified: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupUser {
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,

    /// Write-only; never returned by the console
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub role: String,

    /// basic, ldap, saml, oauth or oidc
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub auth_type: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<Permission>,

    #[serde(default, skip_serializing)]
    pub last_modified: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub perms: Vec<RolePermission>,

    /// Built-in role; returned on read only
    #[serde(default, skip_serializing)]
    pub system: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePermission {
    pub name: String,

    #[serde(default)]
    pub read_write: bool,
}
