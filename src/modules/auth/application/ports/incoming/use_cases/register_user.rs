use async_trait::async_trait;

use crate::auth::application::domain::schema::UserDraft;
use crate::shared::api::AppError;

/// Self-registration. Answers a signed token for the new account.
#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, draft: UserDraft) -> Result<String, AppError>;
}
