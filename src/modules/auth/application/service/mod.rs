mod forgot_password_service;
mod get_me_service;
mod login_user_service;
mod register_user_service;
mod reset_password_service;
mod update_details_service;
mod update_password_service;

pub use forgot_password_service::ForgotPasswordService;
pub use get_me_service::GetMeService;
pub use login_user_service::LoginUserService;
pub use register_user_service::RegisterUserService;
pub use reset_password_service::ResetPasswordService;
pub use update_details_service::UpdateDetailsService;
pub use update_password_service::UpdatePasswordService;

use crate::auth::application::domain::entities::{Principal, User};
use crate::auth::application::ports::outgoing::UserRepository;
use crate::shared::api::{ApiError, AppError};

/// The account behind a verified token. A token for a deleted account is
/// treated like no token at all.
pub(crate) async fn current_user<R>(users: &R, principal: Principal) -> Result<User, AppError>
where
    R: UserRepository + ?Sized,
{
    users
        .find_by_id(principal.user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Not authorized to access this route").into())
}
