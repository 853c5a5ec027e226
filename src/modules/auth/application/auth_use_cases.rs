use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    ForgotPasswordUseCase, GetMeUseCase, LoginUserUseCase, RegisterUserUseCase,
    ResetPasswordUseCase, UpdateDetailsUseCase, UpdatePasswordUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub me: Arc<dyn GetMeUseCase + Send + Sync>,
    pub update_details: Arc<dyn UpdateDetailsUseCase + Send + Sync>,
    pub update_password: Arc<dyn UpdatePasswordUseCase + Send + Sync>,
    pub forgot_password: Arc<dyn ForgotPasswordUseCase + Send + Sync>,
    pub reset_password: Arc<dyn ResetPasswordUseCase + Send + Sync>,
}
