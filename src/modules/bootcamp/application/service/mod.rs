mod bootcamps_in_radius_service;
mod create_bootcamp_service;
mod delete_bootcamp_service;
mod get_bootcamp_service;
mod list_bootcamps_service;
mod update_bootcamp_service;
mod upload_photo_service;

pub use bootcamps_in_radius_service::{BootcampsInRadiusService, INVALID_DISTANCE};
pub use create_bootcamp_service::CreateBootcampService;
pub use delete_bootcamp_service::DeleteBootcampService;
pub use get_bootcamp_service::GetBootcampService;
pub use list_bootcamps_service::ListBootcampsService;
pub use update_bootcamp_service::UpdateBootcampService;
pub use upload_photo_service::UploadPhotoService;

use uuid::Uuid;

use crate::bootcamp::application::domain::entities::Bootcamp;
use crate::bootcamp::application::ports::outgoing::BootcampRepository;
use crate::shared::api::{ApiError, AppError};

pub(crate) async fn existing_bootcamp<R>(bootcamps: &R, id: Uuid) -> Result<Bootcamp, AppError>
where
    R: BootcampRepository + ?Sized,
{
    bootcamps
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Bootcamp not found with id of {}", id)).into())
}
