//! Admin-only account management.

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::domain::schema::UserDraft;
use crate::shared::api::AppError;
use crate::shared::patch::PatchField;
use crate::shared::query::{ListQuery, Page};

#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: PatchField<String>,
    pub email: PatchField<String>,
    pub role: PatchField<String>,
}

#[async_trait]
pub trait ListUsersUseCase: Send + Sync {
    async fn execute(&self, query: ListQuery) -> Result<Page<User>, AppError>;
}

#[async_trait]
pub trait GetUserUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<User, AppError>;
}

/// Any role may be assigned here, `admin` included.
#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    async fn execute(&self, draft: UserDraft) -> Result<User, AppError>;
}

#[async_trait]
pub trait UpdateUserUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, patch: UserPatch) -> Result<User, AppError>;
}

#[async_trait]
pub trait DeleteUserUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), AppError>;
}
