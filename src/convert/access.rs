//! Group, user and role conversions

use super::{map_from, map_into};
use crate::client::models::{Group, GroupUser, Permission, Role, RolePermission, User};
use crate::schema::{GroupSchema, PermissionSchema, RolePermissionSchema, RoleSchema, UserSchema};

impl From<PermissionSchema> for Permission {
    fn from(s: PermissionSchema) -> Self {
        Self {
            collections: s.collections,
            project: s.project,
        }
    }
}

impl From<&Permission> for PermissionSchema {
    fn from(p: &Permission) -> Self {
        Self {
            collections: p.collections.clone(),
            project: p.project.clone(),
        }
    }
}

impl From<GroupSchema> for Group {
    fn from(s: GroupSchema) -> Self {
        Self {
            id: s.name.clone(),
            group_name: s.name,
            ldap_group: s.ldap_group,
            oauth_group: s.oauth_group,
            oidc_group: s.oidc_group,
            saml_group: s.saml_group,
            role: s.role,
            permissions: map_into(s.permission),
            users: s
                .users
                .into_iter()
                .map(|username| GroupUser { username })
                .collect(),
            last_modified: String::new(),
        }
    }
}

impl From<&Group> for GroupSchema {
    fn from(g: &Group) -> Self {
        Self {
            name: g.group_name.clone(),
            role: g.role.clone(),
            ldap_group: g.ldap_group,
            oauth_group: g.oauth_group,
            oidc_group: g.oidc_group,
            saml_group: g.saml_group,
            users: g.users.iter().map(|u| u.username.clone()).collect(),
            permission: map_from(&g.permissions),
        }
    }
}

impl From<UserSchema> for User {
    fn from(s: UserSchema) -> Self {
        Self {
            username: s.username,
            password: s.password,
            role: s.role,
            auth_type: s.auth_type,
            permissions: map_into(s.permission),
            last_modified: String::new(),
        }
    }
}

/// The console never returns passwords, so `password` always reads back empty.
impl From<&User> for UserSchema {
    fn from(u: &User) -> Self {
        Self {
            username: u.username.clone(),
            password: String::new(),
            role: u.role.clone(),
            auth_type: u.auth_type.clone(),
            permission: map_from(&u.permissions),
        }
    }
}

impl From<RolePermissionSchema> for RolePermission {
    fn from(s: RolePermissionSchema) -> Self {
        Self {
            name: s.name,
            read_write: s.read_write,
        }
    }
}

impl From<&RolePermission> for RolePermissionSchema {
    fn from(p: &RolePermission) -> Self {
        Self {
            name: p.name.clone(),
            read_write: p.read_write,
        }
    }
}

impl From<RoleSchema> for Role {
    fn from(s: RoleSchema) -> Self {
        Self {
            name: s.name,
            description: s.description,
            perms: map_into(s.permission),
            system: false,
        }
    }
}

impl From<&Role> for RoleSchema {
    fn from(r: &Role) -> Self {
        Self {
            name: r.name.clone(),
            description: r.description.clone(),
            permission: map_from(&r.perms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_users_are_names() {
        let schema = GroupSchema {
            name: "devops".to_string(),
            role: "devOps".to_string(),
            saml_group: true,
            users: vec!["alice".to_string(), "bob".to_string()],
            permission: vec![PermissionSchema {
                collections: vec!["prod".to_string()],
                project: "Central Console".to_string(),
            }],
            ..Default::default()
        };

        let group = Group::from(schema.clone());
        assert_eq!(group.id, "devops");
        assert_eq!(group.users[1].username, "bob");
        assert_eq!(GroupSchema::from(&group), schema);
    }

    #[test]
    fn test_user_password_is_write_only() {
        let schema = UserSchema {
            username: "ci".to_string(),
            password: "hunter2".to_string(),
            role: "ci".to_string(),
            auth_type: "basic".to_string(),
            permission: Vec::new(),
        };
        let user = User::from(schema);
        assert_eq!(user.password, "hunter2");
        assert!(UserSchema::from(&user).password.is_empty());
    }

    #[test]
    fn test_role_roundtrip() {
        let schema = RoleSchema {
            name: "auditor".to_string(),
            description: "Read-only".to_string(),
            permission: vec![
                RolePermissionSchema {
                    name: "monitorVuln".to_string(),
                    read_write: false,
                },
                RolePermissionSchema {
                    name: "policyRuntimeContainer".to_string(),
                    read_write: true,
                },
            ],
        };
        let role = Role::from(schema.clone());
        assert!(!role.system);
        assert_eq!(RoleSchema::from(&role), schema);
    }
}
