use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::Principal;
use crate::bootcamp::application::domain::entities::Bootcamp;
use crate::bootcamp::application::domain::schema::{validate_new_bootcamp, BootcampDraft};
use crate::bootcamp::application::ports::incoming::use_cases::CreateBootcampUseCase;
use crate::bootcamp::application::ports::outgoing::{BootcampRepository, NewBootcamp};
use crate::geocoding::application::ports::outgoing::Geocoder;
use crate::shared::api::{ApiError, AppError};

pub struct CreateBootcampService<R, G>
where
    R: BootcampRepository,
    G: Geocoder,
{
    bootcamps: R,
    geocoder: G,
}

impl<R, G> CreateBootcampService<R, G>
where
    R: BootcampRepository,
    G: Geocoder,
{
    pub fn new(bootcamps: R, geocoder: G) -> Self {
        Self {
            bootcamps,
            geocoder,
        }
    }
}

#[async_trait]
impl<R, G> CreateBootcampUseCase for CreateBootcampService<R, G>
where
    R: BootcampRepository + Send + Sync,
    G: Geocoder + Send + Sync,
{
    async fn execute(
        &self,
        principal: Principal,
        draft: BootcampDraft,
    ) -> Result<Bootcamp, AppError> {
        if !principal.is_admin() && self.bootcamps.exists_for_owner(principal.user_id).await? {
            return Err(ApiError::bad_request(format!(
                "The user with ID {} has already published a bootcamp",
                principal.user_id
            ))
            .into());
        }

        let (valid, address) = validate_new_bootcamp(&draft)?;
        let location = self.geocoder.geocode(&address).await?;

        let bootcamp = self
            .bootcamps
            .create(NewBootcamp {
                user: principal.user_id,
                name: valid.name,
                slug: valid.slug,
                description: valid.description,
                website: valid.website,
                phone: valid.phone,
                email: valid.email,
                location,
                careers: valid.careers,
                housing: draft.housing.unwrap_or(false),
                job_assistance: draft.job_assistance.unwrap_or(false),
                job_guarantee: draft.job_guarantee.unwrap_or(false),
                accept_gi: draft.accept_gi.unwrap_or(false),
            })
            .await?;

        info!(bootcamp_id = %bootcamp.id, owner = %bootcamp.user, "Bootcamp created");
        Ok(bootcamp)
    }
}
