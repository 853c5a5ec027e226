use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Principal;
use crate::shared::api::AppError;

#[async_trait]
pub trait DeleteBootcampUseCase: Send + Sync {
    async fn execute(&self, principal: Principal, id: Uuid) -> Result<(), AppError>;
}
