use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Principal;
use crate::bootcamp::application::domain::entities::Bootcamp;
use crate::shared::api::AppError;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone, Default)]
pub struct BootcampPatch {
    pub name: PatchField<String>,
    pub description: PatchField<String>,
    pub website: PatchField<String>,
    pub phone: PatchField<String>,
    pub email: PatchField<String>,
    /// A new address is geocoded again.
    pub address: PatchField<String>,
    pub careers: PatchField<Vec<String>>,
    pub housing: PatchField<bool>,
    pub job_assistance: PatchField<bool>,
    pub job_guarantee: PatchField<bool>,
    pub accept_gi: PatchField<bool>,
}

#[async_trait]
pub trait UpdateBootcampUseCase: Send + Sync {
    async fn execute(
        &self,
        principal: Principal,
        id: Uuid,
        patch: BootcampPatch,
    ) -> Result<Bootcamp, AppError>;
}
