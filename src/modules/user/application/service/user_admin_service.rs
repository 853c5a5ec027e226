use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::domain::schema::{
    validate_account, validate_new_user, RolePolicy, UserDraft,
};
use crate::auth::application::ports::outgoing::{
    NewUser, PasswordHasher, UserChanges, UserRepository,
};
use crate::shared::api::{ApiError, AppError};
use crate::shared::query::{ListQuery, Page};
use crate::user::application::ports::incoming::{
    CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, UpdateUserUseCase,
    UserPatch,
};

fn no_user(id: Uuid) -> AppError {
    ApiError::not_found(format!("No user with the id of {}", id)).into()
}

/// Backs every `/api/v1/users` operation; the role gate sits in the routes.
pub struct UserAdminService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    users: R,
    hasher: H,
}

impl<R, H> UserAdminService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    pub fn new(users: R, hasher: H) -> Self {
        Self { users, hasher }
    }
}

#[async_trait]
impl<R, H> ListUsersUseCase for UserAdminService<R, H>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    async fn execute(&self, query: ListQuery) -> Result<Page<User>, AppError> {
        self.users.list(&query).await
    }
}

#[async_trait]
impl<R, H> GetUserUseCase for UserAdminService<R, H>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<User, AppError> {
        self.users.find_by_id(id).await?.ok_or_else(|| no_user(id))
    }
}

#[async_trait]
impl<R, H> CreateUserUseCase for UserAdminService<R, H>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    async fn execute(&self, draft: UserDraft) -> Result<User, AppError> {
        let valid = validate_new_user(draft, RolePolicy::Administrator)?;
        let password_hash = self.hasher.hash_password(&valid.password).await?;

        let user = self
            .users
            .create(NewUser {
                name: valid.name,
                email: valid.email,
                role: valid.role,
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, role = %user.role, "User created by admin");
        Ok(user)
    }
}

#[async_trait]
impl<R, H> UpdateUserUseCase for UserAdminService<R, H>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    async fn execute(&self, id: Uuid, patch: UserPatch) -> Result<User, AppError> {
        let current = self.users.find_by_id(id).await?.ok_or_else(|| no_user(id))?;

        let (name, email, role) = validate_account(
            patch.name.apply(Some(current.name)),
            patch.email.apply(Some(current.email)),
            patch.role.apply(Some(current.role.as_str().to_string())),
        )?;

        self.users
            .update(id, UserChanges { name, email, role })
            .await?
            .ok_or_else(|| no_user(id))
    }
}

#[async_trait]
impl<R, H> DeleteUserUseCase for UserAdminService<R, H>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), AppError> {
        self.users.find_by_id(id).await?.ok_or_else(|| no_user(id))?;
        self.users.delete(id).await?;

        info!(user_id = %id, "User deleted");
        Ok(())
    }
}
