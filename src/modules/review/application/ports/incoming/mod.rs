use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Principal;
use crate::review::application::domain::entities::Review;
use crate::review::application::domain::schema::ReviewDraft;
use crate::shared::api::AppError;
use crate::shared::patch::PatchField;
use crate::shared::query::{ListQuery, Page};

#[derive(Debug, Clone, Default)]
pub struct ReviewPatch {
    pub title: PatchField<String>,
    pub text: PatchField<String>,
    pub rating: PatchField<i32>,
}

#[async_trait]
pub trait ListReviewsUseCase: Send + Sync {
    async fn execute(&self, query: ListQuery) -> Result<Page<Review>, AppError>;
}

#[async_trait]
pub trait ListBootcampReviewsUseCase: Send + Sync {
    async fn execute(&self, bootcamp_id: Uuid) -> Result<Vec<Review>, AppError>;
}

#[async_trait]
pub trait GetReviewUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Review, AppError>;
}

#[async_trait]
pub trait CreateReviewUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: Principal,
        bootcamp_id: Uuid,
        draft: ReviewDraft,
    ) -> Result<Review, AppError>;
}

#[async_trait]
pub trait UpdateReviewUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: Principal,
        id: Uuid,
        patch: ReviewPatch,
    ) -> Result<Review, AppError>;
}

#[async_trait]
pub trait DeleteReviewUseCase: Send + Sync {
    async fn execute(&self, principal: Principal, id: Uuid) -> Result<(), AppError>;
}
