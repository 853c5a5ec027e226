use async_trait::async_trait;

use crate::auth::application::domain::entities::{Principal, User};
use crate::auth::application::ports::incoming::use_cases::GetMeUseCase;
use crate::auth::application::ports::outgoing::UserRepository;
use crate::shared::api::AppError;

use super::current_user;

pub struct GetMeService<R>
where
    R: UserRepository,
{
    users: R,
}

impl<R> GetMeService<R>
where
    R: UserRepository,
{
    pub fn new(users: R) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<R> GetMeUseCase for GetMeService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, principal: Principal) -> Result<User, AppError> {
        current_user(&self.users, principal).await
    }
}
