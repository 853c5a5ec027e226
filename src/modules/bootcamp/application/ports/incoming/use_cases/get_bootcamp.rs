use async_trait::async_trait;
use uuid::Uuid;

use crate::bootcamp::application::domain::entities::Bootcamp;
use crate::shared::api::AppError;

#[async_trait]
pub trait GetBootcampUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Bootcamp, AppError>;
}
