mod forgot_password;
mod get_me;
mod login_user;
mod register_user;
mod reset_password;
mod update_details;
mod update_password;

pub use forgot_password::ForgotPasswordUseCase;
pub use get_me::GetMeUseCase;
pub use login_user::{LoginCredentials, LoginUserUseCase};
pub use register_user::RegisterUserUseCase;
pub use reset_password::ResetPasswordUseCase;
pub use update_details::{UpdateDetailsData, UpdateDetailsUseCase};
pub use update_password::{PasswordChange, UpdatePasswordUseCase};
