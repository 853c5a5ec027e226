use std::sync::Arc;

use crate::bootcamp::application::ports::incoming::use_cases::{
    BootcampsInRadiusUseCase, CreateBootcampUseCase, DeleteBootcampUseCase, GetBootcampUseCase,
    ListBootcampsUseCase, UpdateBootcampUseCase, UploadPhotoUseCase,
};

#[derive(Clone)]
pub struct BootcampUseCases {
    pub list: Arc<dyn ListBootcampsUseCase + Send + Sync>,
    pub get: Arc<dyn GetBootcampUseCase + Send + Sync>,
    pub create: Arc<dyn CreateBootcampUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateBootcampUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteBootcampUseCase + Send + Sync>,
    pub in_radius: Arc<dyn BootcampsInRadiusUseCase + Send + Sync>,
    pub upload_photo: Arc<dyn UploadPhotoUseCase + Send + Sync>,
}
