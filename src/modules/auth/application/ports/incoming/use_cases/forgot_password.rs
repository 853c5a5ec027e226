use async_trait::async_trait;

use crate::shared::api::AppError;

#[async_trait]
pub trait ForgotPasswordUseCase: Send + Sync {
    /// `origin` is `scheme://host` of the incoming request; the emailed
    /// link points back at it.
    async fn execute(&self, email: Option<String>, origin: &str) -> Result<(), AppError>;
}
