use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::application::domain::entities::Principal;
use crate::bootcamp::application::domain::upload_policy::{PhotoUpload, PhotoUploadPolicy};
use crate::bootcamp::application::ports::incoming::use_cases::UploadPhotoUseCase;
use crate::bootcamp::application::ports::outgoing::{BootcampRepository, PhotoStorage};
use crate::shared::api::{ApiError, AppError};

use super::existing_bootcamp;

pub struct UploadPhotoService<R, S>
where
    R: BootcampRepository,
    S: PhotoStorage,
{
    bootcamps: R,
    storage: S,
    policy: PhotoUploadPolicy,
}

impl<R, S> UploadPhotoService<R, S>
where
    R: BootcampRepository,
    S: PhotoStorage,
{
    pub fn new(bootcamps: R, storage: S, policy: PhotoUploadPolicy) -> Self {
        Self {
            bootcamps,
            storage,
            policy,
        }
    }
}

#[async_trait]
impl<R, S> UploadPhotoUseCase for UploadPhotoService<R, S>
where
    R: BootcampRepository + Send + Sync,
    S: PhotoStorage + Send + Sync,
{
    async fn execute(
        &self,
        principal: Principal,
        id: Uuid,
        upload: Option<PhotoUpload>,
    ) -> Result<String, AppError> {
        let bootcamp = existing_bootcamp(&self.bootcamps, id).await?;

        if !principal.can_modify(bootcamp.user) {
            return Err(ApiError::unauthorized(format!(
                "User {} is not authorized to update this bootcamp",
                principal.user_id
            ))
            .into());
        }

        let upload = self.policy.check(upload.as_ref())?;
        let file_name = PhotoUploadPolicy::file_name(id, &upload.file_name);

        self.storage
            .save(&file_name, upload.bytes.clone())
            .await
            .map_err(|e| {
                error!(bootcamp_id = %id, error = %e, "Photo could not be stored");
                ApiError::server_error("Problem with file upload")
            })?;

        self.bootcamps.set_photo(id, &file_name).await?;
        info!(bootcamp_id = %id, photo = %file_name, "Bootcamp photo uploaded");

        Ok(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::bootcamp::application::ports::outgoing::bootcamp_repository::MockBootcampRepository;
    use crate::bootcamp::application::ports::outgoing::photo_storage::MockPhotoStorage;
    use crate::bootcamp::application::ports::outgoing::PhotoStorageError;
    use crate::tests::support::fixtures::sample_bootcamp;

    fn image(size: usize) -> PhotoUpload {
        PhotoUpload {
            file_name: "campus.jpg".to_string(),
            content_type: Some("image/jpeg".to_string()),
            bytes: vec![7; size],
            size,
        }
    }

    fn repo_owned_by(owner: Uuid) -> (MockBootcampRepository, Uuid) {
        let stored = sample_bootcamp(owner);
        let id = stored.id;
        let mut repo = MockBootcampRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        (repo, id)
    }

    #[tokio::test]
    async fn test_photo_is_stored_and_recorded() {
        let owner = Uuid::new_v4();
        let (mut repo, id) = repo_owned_by(owner);
        let expected = format!("photo_{}.jpg", id);
        let recorded = expected.clone();
        repo.expect_set_photo()
            .withf(move |_, name| name == recorded)
            .times(1)
            .returning(|_, _| Ok(()));
        let mut storage = MockPhotoStorage::new();
        storage
            .expect_save()
            .withf(|_, bytes| bytes.len() == 32)
            .times(1)
            .returning(|_, _| Ok(()));

        let name = UploadPhotoService::new(repo, storage, PhotoUploadPolicy::default())
            .execute(Principal::new(owner, Role::Publisher), id, Some(image(32)))
            .await
            .unwrap();

        assert_eq!(name, expected);
    }

    #[tokio::test]
    async fn test_oversized_photo_writes_nothing() {
        let owner = Uuid::new_v4();
        let (mut repo, id) = repo_owned_by(owner);
        repo.expect_set_photo().times(0);
        let mut storage = MockPhotoStorage::new();
        storage.expect_save().times(0);

        let err = UploadPhotoService::new(repo, storage, PhotoUploadPolicy::new(16))
            .execute(Principal::new(owner, Role::Publisher), id, Some(image(17)))
            .await
            .unwrap_err();

        assert_eq!(
            err.normalize().message,
            "Please upload an image less than 16 bytes"
        );
    }

    #[tokio::test]
    async fn test_ownership_checked_before_file() {
        let (repo, id) = repo_owned_by(Uuid::new_v4());
        let mut storage = MockPhotoStorage::new();
        storage.expect_save().times(0);

        let err = UploadPhotoService::new(repo, storage, PhotoUploadPolicy::default())
            .execute(Principal::new(Uuid::new_v4(), Role::Publisher), id, None)
            .await
            .unwrap_err();

        assert_eq!(err.normalize().status.as_u16(), 401);
    }

    #[tokio::test]
    async fn test_storage_failure_is_reported() {
        let owner = Uuid::new_v4();
        let (mut repo, id) = repo_owned_by(owner);
        repo.expect_set_photo().times(0);
        let mut storage = MockPhotoStorage::new();
        storage
            .expect_save()
            .returning(|_, _| Err(PhotoStorageError("disk full".to_string())));

        let err = UploadPhotoService::new(repo, storage, PhotoUploadPolicy::default())
            .execute(Principal::new(owner, Role::Publisher), id, Some(image(8)))
            .await
            .unwrap_err();

        let value = err.normalize();
        assert_eq!(value.status.as_u16(), 500);
        assert_eq!(value.message, "Problem with file upload");
    }
}
