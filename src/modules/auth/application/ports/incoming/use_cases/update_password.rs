use async_trait::async_trait;

use crate::auth::application::domain::entities::Principal;
use crate::shared::api::AppError;

#[derive(Debug, Clone, Default)]
pub struct PasswordChange {
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

/// Answers a fresh token once the password has been replaced.
#[async_trait]
pub trait UpdatePasswordUseCase: Send + Sync {
    async fn execute(&self, principal: Principal, change: PasswordChange)
        -> Result<String, AppError>;
}
