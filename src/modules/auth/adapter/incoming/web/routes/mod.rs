mod forgot_password;
mod get_me;
mod login_user;
mod logout_user;
mod register_user;
mod reset_password;
mod update_details;
mod update_password;

pub use forgot_password::{
    __path_forgot_password_handler, forgot_password_handler, ForgotPasswordRequest,
};
pub use get_me::{__path_get_me_handler, get_me_handler};
pub use login_user::{__path_login_user_handler, login_user_handler, LoginRequest};
pub use logout_user::{__path_logout_user_handler, logout_user_handler};
pub use register_user::{__path_register_user_handler, register_user_handler, RegisterRequest};
pub use reset_password::{
    __path_reset_password_handler, reset_password_handler, ResetPasswordRequest,
};
pub use update_details::{
    __path_update_details_handler, update_details_handler, UpdateDetailsRequest,
};
pub use update_password::{
    __path_update_password_handler, update_password_handler, UpdatePasswordRequest,
};
