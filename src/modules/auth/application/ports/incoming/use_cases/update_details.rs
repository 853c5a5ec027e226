use async_trait::async_trait;

use crate::auth::application::domain::entities::{Principal, User};
use crate::shared::api::AppError;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone, Default)]
pub struct UpdateDetailsData {
    pub name: PatchField<String>,
    pub email: PatchField<String>,
}

#[async_trait]
pub trait UpdateDetailsUseCase: Send + Sync {
    async fn execute(&self, principal: Principal, data: UpdateDetailsData)
        -> Result<User, AppError>;
}
