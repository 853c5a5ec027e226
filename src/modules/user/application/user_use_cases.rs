use std::sync::Arc;

use crate::user::application::ports::incoming::{
    CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, UpdateUserUseCase,
};

#[derive(Clone)]
pub struct UserUseCases {
    pub list: Arc<dyn ListUsersUseCase + Send + Sync>,
    pub get: Arc<dyn GetUserUseCase + Send + Sync>,
    pub create: Arc<dyn CreateUserUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateUserUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteUserUseCase + Send + Sync>,
}
