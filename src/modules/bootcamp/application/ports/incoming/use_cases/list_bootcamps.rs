use async_trait::async_trait;

use crate::bootcamp::application::domain::entities::BootcampWithCourses;
use crate::shared::api::AppError;
use crate::shared::query::{ListQuery, Page};

#[async_trait]
pub trait ListBootcampsUseCase: Send + Sync {
    async fn execute(&self, query: ListQuery) -> Result<Page<BootcampWithCourses>, AppError>;
}
