use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::Principal;
use crate::auth::application::domain::schema::validate_password;
use crate::auth::application::ports::incoming::use_cases::{
    PasswordChange, UpdatePasswordUseCase,
};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserRepository};
use crate::shared::api::{ApiError, AppError};

use super::current_user;

pub struct UpdatePasswordService<R, H, T>
where
    R: UserRepository,
    H: PasswordHasher,
    T: TokenProvider,
{
    users: R,
    hasher: H,
    tokens: T,
}

impl<R, H, T> UpdatePasswordService<R, H, T>
where
    R: UserRepository,
    H: PasswordHasher,
    T: TokenProvider,
{
    pub fn new(users: R, hasher: H, tokens: T) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<R, H, T> UpdatePasswordUseCase for UpdatePasswordService<R, H, T>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
    T: TokenProvider + Send + Sync,
{
    async fn execute(
        &self,
        principal: Principal,
        change: PasswordChange,
    ) -> Result<String, AppError> {
        let user = current_user(&self.users, principal).await?;

        let current_password = change.current_password.unwrap_or_default();
        if !self
            .hasher
            .verify_password(&current_password, &user.password_hash)
            .await?
        {
            return Err(ApiError::unauthorized("Password is incorrect").into());
        }

        let new_password = change.new_password.unwrap_or_default();
        validate_password(&new_password)?;

        let password_hash = self.hasher.hash_password(&new_password).await?;
        self.users.set_password(user.id, password_hash).await?;

        info!(user_id = %user.id, "Password changed");
        Ok(self.tokens.generate_token(user.id, user.role)?)
    }
}
