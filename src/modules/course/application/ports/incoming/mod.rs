use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Principal;
use crate::course::application::domain::entities::Course;
use crate::course::application::domain::schema::CourseDraft;
use crate::shared::api::AppError;
use crate::shared::patch::PatchField;
use crate::shared::query::{ListQuery, Page};

#[derive(Debug, Clone, Default)]
pub struct CoursePatch {
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub weeks: PatchField<String>,
    pub tuition: PatchField<i32>,
    pub minimum_skill: PatchField<String>,
    pub scholarship_available: PatchField<bool>,
}

#[async_trait]
pub trait ListCoursesUseCase: Send + Sync {
    async fn execute(&self, query: ListQuery) -> Result<Page<Course>, AppError>;
}

#[async_trait]
pub trait ListBootcampCoursesUseCase: Send + Sync {
    async fn execute(&self, bootcamp_id: Uuid) -> Result<Vec<Course>, AppError>;
}

#[async_trait]
pub trait GetCourseUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Course, AppError>;
}

#[async_trait]
pub trait CreateCourseUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: Principal,
        bootcamp_id: Uuid,
        draft: CourseDraft,
    ) -> Result<Course, AppError>;
}

#[async_trait]
pub trait UpdateCourseUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: Principal,
        id: Uuid,
        patch: CoursePatch,
    ) -> Result<Course, AppError>;
}

#[async_trait]
pub trait DeleteCourseUseCase: Send + Sync {
    async fn execute(&self, principal: Principal, id: Uuid) -> Result<(), AppError>;
}
