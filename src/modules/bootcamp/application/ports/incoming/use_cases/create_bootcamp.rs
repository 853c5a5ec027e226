use async_trait::async_trait;

use crate::auth::application::domain::entities::Principal;
use crate::bootcamp::application::domain::entities::Bootcamp;
use crate::bootcamp::application::domain::schema::BootcampDraft;
use crate::shared::api::AppError;

/// The caller becomes the owner. Non-admins may publish one bootcamp.
#[async_trait]
pub trait CreateBootcampUseCase: Send + Sync {
    async fn execute(&self, principal: Principal, draft: BootcampDraft)
        -> Result<Bootcamp, AppError>;
}
