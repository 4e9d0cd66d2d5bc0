//! Access management API trait

use async_trait::async_trait;

use crate::client::models::{Group, Role, User};
use crate::error::Result;

/// Groups, users and roles
#[async_trait]
pub trait AccessApi: Send + Sync {
    // ========================================================================
    // Groups
    // ========================================================================

    async fn list_groups(&self) -> Result<Vec<Group>>;

    async fn create_group(&self, group: &Group) -> Result<()>;

    async fn update_group(&self, name: &str, group: &Group) -> Result<()>;

    async fn delete_group(&self, name: &str) -> Result<()>;

    // ========================================================================
    // Users
    // ========================================================================

    async fn list_users(&self) -> Result<Vec<User>>;

    async fn create_user(&self, user: &User) -> Result<()>;

    async fn update_user(&self, user: &User) -> Result<()>;

    async fn delete_user(&self, username: &str) -> Result<()>;

    // ========================================================================
    // Roles
    // ========================================================================

    async fn list_roles(&self) -> Result<Vec<Role>>;

    async fn create_role(&self, role: &Role) -> Result<()>;

    async fn update_role(&self, role: &Role) -> Result<()>;

    async fn delete_role(&self, name: &str) -> Result<()>;
}
