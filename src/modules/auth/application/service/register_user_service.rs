use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::schema::{validate_new_user, RolePolicy, UserDraft};
use crate::auth::application::ports::incoming::use_cases::RegisterUserUseCase;
use crate::auth::application::ports::outgoing::{
    NewUser, PasswordHasher, TokenProvider, UserRepository,
};
use crate::shared::api::AppError;

pub struct RegisterUserService<R, H, T>
where
    R: UserRepository,
    H: PasswordHasher,
    T: TokenProvider,
{
    users: R,
    hasher: H,
    tokens: T,
}

impl<R, H, T> RegisterUserService<R, H, T>
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
impl<R, H, T> RegisterUserUseCase for RegisterUserService<R, H, T>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
    T: TokenProvider + Send + Sync,
{
    async fn execute(&self, draft: UserDraft) -> Result<String, AppError> {
        let valid = validate_new_user(draft, RolePolicy::SelfRegistration)?;
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

        info!(user_id = %user.id, role = %user.role, "User registered");

        Ok(self.tokens.generate_token(user.id, user.role)?)
    }
}
