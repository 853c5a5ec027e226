use async_trait::async_trait;
use uuid::Uuid;

use crate::bootcamp::application::domain::entities::Bootcamp;
use crate::bootcamp::application::ports::incoming::use_cases::GetBootcampUseCase;
use crate::bootcamp::application::ports::outgoing::BootcampRepository;
use crate::shared::api::AppError;

use super::existing_bootcamp;

pub struct GetBootcampService<R>
where
    R: BootcampRepository,
{
    bootcamps: R,
}

impl<R> GetBootcampService<R>
where
    R: BootcampRepository,
{
    pub fn new(bootcamps: R) -> Self {
        Self { bootcamps }
    }
}

#[async_trait]
impl<R> GetBootcampUseCase for GetBootcampService<R>
where
    R: BootcampRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Bootcamp, AppError> {
        existing_bootcamp(&self.bootcamps, id).await
    }
}
