use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Principal;
use crate::bootcamp::application::domain::upload_policy::PhotoUpload;
use crate::shared::api::AppError;

/// Answers the stored file name.
#[async_trait]
pub trait UploadPhotoUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: Principal,
        id: Uuid,
        upload: Option<PhotoUpload>,
    ) -> Result<String, AppError>;
}
