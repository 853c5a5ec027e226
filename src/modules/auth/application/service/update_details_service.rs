use async_trait::async_trait;

use crate::auth::application::domain::entities::{Principal, User};
use crate::auth::application::domain::schema::validate_details;
use crate::auth::application::ports::incoming::use_cases::{
    UpdateDetailsData, UpdateDetailsUseCase,
};
use crate::auth::application::ports::outgoing::{UserChanges, UserRepository};
use crate::shared::api::{ApiError, AppError};

use super::current_user;

/// Name and email of the caller's own account. The role is never touched.
pub struct UpdateDetailsService<R>
where
    R: UserRepository,
{
    users: R,
}

impl<R> UpdateDetailsService<R>
where
    R: UserRepository,
{
    pub fn new(users: R) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<R> UpdateDetailsUseCase for UpdateDetailsService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        principal: Principal,
        data: UpdateDetailsData,
    ) -> Result<User, AppError> {
        let current = current_user(&self.users, principal).await?;

        let (name, email) = validate_details(
            data.name.apply(Some(current.name)),
            data.email.apply(Some(current.email)),
        )?;

        self.users
            .update(
                current.id,
                UserChanges {
                    name,
                    email,
                    role: current.role,
                },
            )
            .await?
            .ok_or_else(|| ApiError::unauthorized("Not authorized to access this route").into())
    }
}
