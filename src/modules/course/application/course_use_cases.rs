use std::sync::Arc;

use crate::course::application::ports::incoming::{
    CreateCourseUseCase, DeleteCourseUseCase, GetCourseUseCase, ListBootcampCoursesUseCase,
    ListCoursesUseCase, UpdateCourseUseCase,
};

#[derive(Clone)]
pub struct CourseUseCases {
    pub list: Arc<dyn ListCoursesUseCase + Send + Sync>,
    pub list_for_bootcamp: Arc<dyn ListBootcampCoursesUseCase + Send + Sync>,
    pub get: Arc<dyn GetCourseUseCase + Send + Sync>,
    pub create: Arc<dyn CreateCourseUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCourseUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCourseUseCase + Send + Sync>,
}
