use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::Principal;
use crate::bootcamp::application::ports::incoming::use_cases::DeleteBootcampUseCase;
use crate::bootcamp::application::ports::outgoing::BootcampRepository;
use crate::shared::api::{ApiError, AppError};

use super::existing_bootcamp;

pub struct DeleteBootcampService<R>
where
    R: BootcampRepository,
{
    bootcamps: R,
}

impl<R> DeleteBootcampService<R>
where
    R: BootcampRepository,
{
    pub fn new(bootcamps: R) -> Self {
        Self { bootcamps }
    }
}

#[async_trait]
impl<R> DeleteBootcampUseCase for DeleteBootcampService<R>
where
    R: BootcampRepository + Send + Sync,
{
    async fn execute(&self, principal: Principal, id: Uuid) -> Result<(), AppError> {
        let bootcamp = existing_bootcamp(&self.bootcamps, id).await?;

        if !principal.can_modify(bootcamp.user) {
            return Err(ApiError::unauthorized(format!(
                "User {} is not authorized to delete this bootcamp",
                principal.user_id
            ))
            .into());
        }

        self.bootcamps.delete(id).await?;
        info!(bootcamp_id = %id, "Bootcamp deleted with its courses and reviews");
        Ok(())
    }
}
