use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::auth::application::domain::reset_token::hash_reset_token;
use crate::auth::application::domain::schema::validate_password;
use crate::auth::application::ports::incoming::use_cases::ResetPasswordUseCase;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserRepository};
use crate::shared::api::{ApiError, AppError};

pub struct ResetPasswordService<R, H, T>
where
    R: UserRepository,
    H: PasswordHasher,
    T: TokenProvider,
{
    users: R,
    hasher: H,
    tokens: T,
}

impl<R, H, T> ResetPasswordService<R, H, T>
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
impl<R, H, T> ResetPasswordUseCase for ResetPasswordService<R, H, T>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
    T: TokenProvider + Send + Sync,
{
    async fn execute(
        &self,
        reset_token: &str,
        password: Option<String>,
    ) -> Result<String, AppError> {
        let digest = hash_reset_token(reset_token);

        let user = self
            .users
            .find_by_reset_token(&digest, Utc::now())
            .await?
            .ok_or_else(|| ApiError::bad_request("Invalid token"))?;

        let password = password.unwrap_or_default();
        validate_password(&password)?;

        let password_hash = self.hasher.hash_password(&password).await?;
        self.users.set_password(user.id, password_hash).await?;

        info!(user_id = %user.id, "Password reset");
        Ok(self.tokens.generate_token(user.id, user.role)?)
    }
}
