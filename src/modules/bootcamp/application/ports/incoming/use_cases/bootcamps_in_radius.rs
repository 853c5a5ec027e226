use async_trait::async_trait;

use crate::bootcamp::application::domain::entities::Bootcamp;
use crate::shared::api::AppError;

/// Bootcamps within `distance` miles of the centre of `zipcode`.
#[async_trait]
pub trait BootcampsInRadiusUseCase: Send + Sync {
    async fn execute(&self, zipcode: &str, distance: f64) -> Result<Vec<Bootcamp>, AppError>;
}
