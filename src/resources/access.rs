//! Groups, users and roles

use async_trait::async_trait;

use super::{Resource, find, found};
use crate::client::ComputeApi;
use crate::client::models::{Group, Role, User};
use crate::error::Result;
use crate::schema::{GroupSchema, RoleSchema, UserSchema};

pub struct GroupResource;

#[async_trait]
impl Resource for GroupResource {
    type Schema = GroupSchema;

    fn kind(&self) -> &'static str {
        "group"
    }

    fn key(&self, schema: &Self::Schema) -> Option<String> {
        Some(schema.name.clone())
    }

    async fn create<C: ComputeApi>(&self, client: &C, schema: &Self::Schema) -> Result<String> {
        let group = Group::from(schema.clone());
        client.create_group(&group).await?;
        Ok(group.group_name)
    }

    async fn read<C: ComputeApi>(&self, client: &C, id: &str) -> Result<Option<Self::Schema>> {
        let groups = client.list_groups().await?;
        let group = found(find(groups, self.kind(), id, |g| g.group_name == id))?;
        Ok(group.as_ref().map(GroupSchema::from))
    }

    async fn update<C: ComputeApi>(
        &self,
        client: &C,
        id: &str,
        schema: &Self::Schema,
    ) -> Result<()> {
        client.update_group(id, &Group::from(schema.clone())).await
    }

    async fn delete<C: ComputeApi>(&self, client: &C, id: &str) -> Result<()> {
        client.delete_group(id).await
    }
}

/// Users, keyed by username. Passwords are write-only.
pub struct UserResource;

#[async_trait]
impl Resource for UserResource {
    type Schema = UserSchema;

    fn kind(&self) -> &'static str {
        "user"
    }

    fn key(&self, schema: &Self::Schema) -> Option<String> {
        Some(schema.username.clone())
    }

    async fn create<C: ComputeApi>(&self, client: &C, schema: &Self::Schema) -> Result<String> {
        let user = User::from(schema.clone());
        client.create_user(&user).await?;
        Ok(user.username)
    }

    async fn read<C: ComputeApi>(&self, client: &C, id: &str) -> Result<Option<Self::Schema>> {
        let users = client.list_users().await?;
        let user = found(find(users, self.kind(), id, |u| u.username == id))?;
        Ok(user.as_ref().map(UserSchema::from))
    }

    async fn update<C: ComputeApi>(
        &self,
        client: &C,
        _id: &str,
        schema: &Self::Schema,
    ) -> Result<()> {
        client.update_user(&User::from(schema.clone())).await
    }

    async fn delete<C: ComputeApi>(&self, client: &C, id: &str) -> Result<()> {
        client.delete_user(id).await
    }

    fn carry_over(&self, declared: &Self::Schema, observed: &mut Self::Schema) {
        if observed.password.is_empty() {
            observed.password = declared.password.clone();
        }
    }
}

pub struct RoleResource;

#[async_trait]
impl Resource for RoleResource {
    type Schema = RoleSchema;

    fn kind(&self) -> &'static str {
        "role"
    }

    fn key(&self, schema: &Self::Schema) -> Option<String> {
        Some(schema.name.clone())
    }

    async fn create<C: ComputeApi>(&self, client: &C, schema: &Self::Schema) -> Result<String> {
        let role = Role::from(schema.clone());
        client.create_role(&role).await?;
        Ok(role.name)
    }

    async fn read<C: ComputeApi>(&self, client: &C, id: &str) -> Result<Option<Self::Schema>> {
        let roles = client.list_roles().await?;
        let role = found(find(roles, self.kind(), id, |r| r.name == id))?;
        Ok(role.as_ref().map(RoleSchema::from))
    }

    async fn update<C: ComputeApi>(
        &self,
        client: &C,
        _id: &str,
        schema: &Self::Schema,
    ) -> Result<()> {
        client.update_role(&Role::from(schema.clone())).await
    }

    async fn delete<C: ComputeApi>(&self, client: &C, id: &str) -> Result<()> {
        client.delete_role(id).await
    }
}
