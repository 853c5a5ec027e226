use async_trait::async_trait;

use crate::shared::api::AppError;

#[derive(Debug, Clone, Default)]
pub struct LoginCredentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, credentials: LoginCredentials) -> Result<String, AppError>;
}
