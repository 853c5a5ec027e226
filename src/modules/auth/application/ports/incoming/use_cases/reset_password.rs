use async_trait::async_trait;

use crate::shared::api::AppError;

#[async_trait]
pub trait ResetPasswordUseCase: Send + Sync {
    async fn execute(&self, reset_token: &str, password: Option<String>)
        -> Result<String, AppError>;
}
