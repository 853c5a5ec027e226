use async_trait::async_trait;

use crate::auth::application::domain::entities::{Principal, User};
use crate::shared::api::AppError;

#[async_trait]
pub trait GetMeUseCase: Send + Sync {
    async fn execute(&self, principal: Principal) -> Result<User, AppError>;
}
