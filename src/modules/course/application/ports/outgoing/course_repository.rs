use async_trait::async_trait;
use uuid::Uuid;

use crate::course::application::domain::entities::Course;
use crate::course::application::domain::schema::ValidCourse;
use crate::shared::api::AppError;
use crate::shared::query::{ListQuery, Page};
use crate::shared::storage::StorageFault;

#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse {
    pub bootcamp_id: Uuid,
    pub user: Uuid,
    pub fields: ValidCourse,
}

/// Every write recomputes the owning bootcamp's average cost.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create(&self, course: NewCourse) -> Result<Course, StorageFault>;

    /// Read with the bootcamp summary embedded.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, StorageFault>;

    async fn list(&self, query: &ListQuery) -> Result<Page<Course>, AppError>;

    async fn list_for_bootcamp(&self, bootcamp_id: Uuid) -> Result<Vec<Course>, StorageFault>;

    async fn update(&self, id: Uuid, fields: ValidCourse) -> Result<Option<Course>, StorageFault>;

    async fn delete(&self, id: Uuid, bootcamp_id: Uuid) -> Result<(), StorageFault>;
}
