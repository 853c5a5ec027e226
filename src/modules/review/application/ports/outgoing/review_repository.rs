use async_trait::async_trait;
use uuid::Uuid;

use crate::review::application::domain::entities::Review;
use crate::review::application::domain::schema::ValidReview;
use crate::shared::api::AppError;
use crate::shared::query::{ListQuery, Page};
use crate::shared::storage::StorageFault;

#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub bootcamp_id: Uuid,
    pub user: Uuid,
    pub fields: ValidReview,
}

/// Every write recomputes the bootcamp's average rating.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// A second review of the same bootcamp by the same user is a
    /// [`StorageFault::Duplicate`].
    async fn create(&self, review: NewReview) -> Result<Review, StorageFault>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, StorageFault>;

    async fn list(&self, query: &ListQuery) -> Result<Page<Review>, AppError>;

    async fn list_for_bootcamp(&self, bootcamp_id: Uuid) -> Result<Vec<Review>, StorageFault>;

    async fn update(&self, id: Uuid, fields: ValidReview) -> Result<Option<Review>, StorageFault>;

    async fn delete(&self, id: Uuid, bootcamp_id: Uuid) -> Result<(), StorageFault>;
}
