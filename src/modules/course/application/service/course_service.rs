use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::Principal;
use crate::bootcamp::application::ports::outgoing::BootcampRepository;
use crate::course::application::domain::entities::Course;
use crate::course::application::domain::schema::{validate_course, CourseDraft};
use crate::course::application::ports::incoming::{
    CoursePatch, CreateCourseUseCase, DeleteCourseUseCase, GetCourseUseCase,
    ListBootcampCoursesUseCase, ListCoursesUseCase, UpdateCourseUseCase,
};
use crate::course::application::ports::outgoing::{CourseRepository, NewCourse};
use crate::shared::api::{ApiError, AppError};
use crate::shared::query::{ListQuery, Page};

fn no_course(id: Uuid) -> AppError {
    ApiError::not_found(format!("No course with the id of {}", id)).into()
}

pub struct CourseService<C, B>
where
    C: CourseRepository,
    B: BootcampRepository,
{
    courses: C,
    bootcamps: B,
}

impl<C, B> CourseService<C, B>
where
    C: CourseRepository,
    B: BootcampRepository,
{
    pub fn new(courses: C, bootcamps: B) -> Self {
        Self { courses, bootcamps }
    }

    async fn existing(&self, id: Uuid) -> Result<Course, AppError> {
        self.courses.find_by_id(id).await?.ok_or_else(|| no_course(id))
    }
}

#[async_trait]
impl<C, B> ListCoursesUseCase for CourseService<C, B>
where
    C: CourseRepository + Send + Sync,
    B: BootcampRepository + Send + Sync,
{
    async fn execute(&self, query: ListQuery) -> Result<Page<Course>, AppError> {
        self.courses.list(&query).await
    }
}

#[async_trait]
impl<C, B> ListBootcampCoursesUseCase for CourseService<C, B>
where
    C: CourseRepository + Send + Sync,
    B: BootcampRepository + Send + Sync,
{
    async fn execute(&self, bootcamp_id: Uuid) -> Result<Vec<Course>, AppError> {
        Ok(self.courses.list_for_bootcamp(bootcamp_id).await?)
    }
}

#[async_trait]
impl<C, B> GetCourseUseCase for CourseService<C, B>
where
    C: CourseRepository + Send + Sync,
    B: BootcampRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Course, AppError> {
        self.existing(id).await
    }
}

#[async_trait]
impl<C, B> CreateCourseUseCase for CourseService<C, B>
where
    C: CourseRepository + Send + Sync,
    B: BootcampRepository + Send + Sync,
{
    async fn execute(
        &self,
        principal: Principal,
        bootcamp_id: Uuid,
        draft: CourseDraft,
    ) -> Result<Course, AppError> {
        let bootcamp = self.bootcamps.find_by_id(bootcamp_id).await?.ok_or_else(|| {
            ApiError::not_found(format!("No bootcamp with the id of {}", bootcamp_id))
        })?;

        if !principal.can_modify(bootcamp.user) {
            return Err(ApiError::unauthorized(format!(
                "User {} is not authorized to add a course to bootcamp {}",
                principal.user_id, bootcamp_id
            ))
            .into());
        }

        let fields = validate_course(draft)?;
        let course = self
            .courses
            .create(NewCourse {
                bootcamp_id,
                user: principal.user_id,
                fields,
            })
            .await?;

        info!(course_id = %course.id, bootcamp_id = %bootcamp_id, "Course created");
        Ok(course)
    }
}

#[async_trait]
impl<C, B> UpdateCourseUseCase for CourseService<C, B>
where
    C: CourseRepository + Send + Sync,
    B: BootcampRepository + Send + Sync,
{
    async fn execute(
        &self,
        principal: Principal,
        id: Uuid,
        patch: CoursePatch,
    ) -> Result<Course, AppError> {
        let current = self.existing(id).await?;

        if !principal.can_modify(current.user) {
            return Err(ApiError::unauthorized(format!(
                "User {} is not authorized to update course {}",
                principal.user_id, id
            ))
            .into());
        }

        let fields = validate_course(CourseDraft {
            title: patch.title.apply(Some(current.title)),
            description: patch.description.apply(Some(current.description)),
            weeks: patch.weeks.apply(Some(current.weeks)),
            tuition: patch.tuition.apply(Some(current.tuition)),
            minimum_skill: patch
                .minimum_skill
                .apply(Some(current.minimum_skill.as_str().to_string())),
            scholarship_available: patch
                .scholarship_available
                .apply(Some(current.scholarship_available)),
        })?;

        let course = self
            .courses
            .update(id, fields)
            .await?
            .ok_or_else(|| no_course(id))?;

        info!(course_id = %id, "Course updated");
        Ok(course)
    }
}

#[async_trait]
impl<C, B> DeleteCourseUseCase for CourseService<C, B>
where
    C: CourseRepository + Send + Sync,
    B: BootcampRepository + Send + Sync,
{
    async fn execute(&self, principal: Principal, id: Uuid) -> Result<(), AppError> {
        let course = self.existing(id).await?;

        if !principal.can_modify(course.user) {
            return Err(ApiError::unauthorized(format!(
                "User {} is not authorized to delete course {}",
                principal.user_id, id
            ))
            .into());
        }

        self.courses
            .delete(id, course.bootcamp.bootcamp_id())
            .await?;
        info!(course_id = %id, "Course deleted");
        Ok(())
    }
}
