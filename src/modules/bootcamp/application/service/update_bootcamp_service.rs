use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::Principal;
use crate::bootcamp::application::domain::entities::Bootcamp;
use crate::bootcamp::application::domain::schema::{validate_bootcamp, BootcampFields};
use crate::bootcamp::application::ports::incoming::use_cases::{
    BootcampPatch, UpdateBootcampUseCase,
};
use crate::bootcamp::application::ports::outgoing::{BootcampChanges, BootcampRepository};
use crate::geocoding::application::ports::outgoing::Geocoder;
use crate::shared::api::{ApiError, AppError};
use crate::shared::patch::PatchField;
use crate::shared::storage::StorageFault;

use super::existing_bootcamp;

pub struct UpdateBootcampService<R, G>
where
    R: BootcampRepository,
    G: Geocoder,
{
    bootcamps: R,
    geocoder: G,
}

impl<R, G> UpdateBootcampService<R, G>
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
impl<R, G> UpdateBootcampUseCase for UpdateBootcampService<R, G>
where
    R: BootcampRepository + Send + Sync,
    G: Geocoder + Send + Sync,
{
    async fn execute(
        &self,
        principal: Principal,
        id: Uuid,
        patch: BootcampPatch,
    ) -> Result<Bootcamp, AppError> {
        let current = existing_bootcamp(&self.bootcamps, id).await?;

        if !principal.can_modify(current.user) {
            return Err(ApiError::unauthorized(format!(
                "User {} is not authorized to update this bootcamp",
                principal.user_id
            ))
            .into());
        }

        let valid = validate_bootcamp(BootcampFields {
            name: patch.name.apply(Some(current.name)),
            description: patch.description.apply(Some(current.description)),
            website: patch.website.apply(current.website),
            phone: patch.phone.apply(current.phone),
            email: patch.email.apply(current.email),
            careers: patch.careers.apply(Some(current.careers)),
        })?;

        let location = match patch.address {
            PatchField::Unset => current.location,
            PatchField::Value(address) if !address.trim().is_empty() => {
                Some(self.geocoder.geocode(address.trim()).await?)
            }
            _ => {
                return Err(StorageFault::validation(["Please add an address"]).into());
            }
        };

        let changes = BootcampChanges {
            name: valid.name,
            slug: valid.slug,
            description: valid.description,
            website: valid.website,
            phone: valid.phone,
            email: valid.email,
            location,
            careers: valid.careers,
            housing: flag(patch.housing, current.housing),
            job_assistance: flag(patch.job_assistance, current.job_assistance),
            job_guarantee: flag(patch.job_guarantee, current.job_guarantee),
            accept_gi: flag(patch.accept_gi, current.accept_gi),
        };

        let updated = self
            .bootcamps
            .update(id, changes)
            .await?
            .ok_or_else(|| ApiError::not_found(format!("Bootcamp not found with id of {}", id)))?;

        info!(bootcamp_id = %id, "Bootcamp updated");
        Ok(updated)
    }
}

/// `null` resets a flag to its default.
fn flag(patch: PatchField<bool>, current: bool) -> bool {
    patch.apply(Some(current)).unwrap_or(false)
}
