use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::{Role, User};
use crate::auth::application::domain::reset_token::ResetToken;
use crate::shared::api::AppError;
use crate::shared::query::{ListQuery, Page};
use crate::shared::storage::StorageFault;

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password_hash: String,
}

/// Full replacement of the editable profile fields.
#[derive(Debug, Clone, PartialEq)]
pub struct UserChanges {
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: NewUser) -> Result<User, StorageFault>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StorageFault>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageFault>;

    /// User holding `token_hash` whose reset window is still open at `now`.
    async fn find_by_reset_token(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, StorageFault>;

    async fn list(&self, query: &ListQuery) -> Result<Page<User>, AppError>;

    /// `None` when no such user exists.
    async fn update(&self, id: Uuid, changes: UserChanges)
        -> Result<Option<User>, StorageFault>;

    /// Stores a new password hash and clears any pending reset token.
    async fn set_password(&self, id: Uuid, password_hash: String) -> Result<(), StorageFault>;

    async fn set_reset_token(
        &self,
        id: Uuid,
        token: Option<ResetToken>,
    ) -> Result<(), StorageFault>;

    async fn delete(&self, id: Uuid) -> Result<(), StorageFault>;
}
