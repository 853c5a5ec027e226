use std::sync::Arc;

use crate::review::application::ports::incoming::{
    CreateReviewUseCase, DeleteReviewUseCase, GetReviewUseCase, ListBootcampReviewsUseCase,
    ListReviewsUseCase, UpdateReviewUseCase,
};

#[derive(Clone)]
pub struct ReviewUseCases {
    pub list: Arc<dyn ListReviewsUseCase + Send + Sync>,
    pub list_for_bootcamp: Arc<dyn ListBootcampReviewsUseCase + Send + Sync>,
    pub get: Arc<dyn GetReviewUseCase + Send + Sync>,
    pub create: Arc<dyn CreateReviewUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateReviewUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteReviewUseCase + Send + Sync>,
}
