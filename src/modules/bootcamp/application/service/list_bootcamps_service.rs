use async_trait::async_trait;

use crate::bootcamp::application::domain::entities::BootcampWithCourses;
use crate::bootcamp::application::ports::incoming::use_cases::ListBootcampsUseCase;
use crate::bootcamp::application::ports::outgoing::BootcampRepository;
use crate::shared::api::AppError;
use crate::shared::query::{ListQuery, Page};

pub struct ListBootcampsService<R>
where
    R: BootcampRepository,
{
    bootcamps: R,
}

impl<R> ListBootcampsService<R>
where
    R: BootcampRepository,
{
    pub fn new(bootcamps: R) -> Self {
        Self { bootcamps }
    }
}

#[async_trait]
impl<R> ListBootcampsUseCase for ListBootcampsService<R>
where
    R: BootcampRepository + Send + Sync,
{
    async fn execute(&self, query: ListQuery) -> Result<Page<BootcampWithCourses>, AppError> {
        self.bootcamps.list(&query).await
    }
}
