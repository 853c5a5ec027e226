use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::ports::incoming::use_cases::{LoginCredentials, LoginUserUseCase};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserRepository};
use crate::shared::api::{ApiError, AppError};

pub struct LoginUserService<R, H, T>
where
    R: UserRepository,
    H: PasswordHasher,
    T: TokenProvider,
{
    users: R,
    hasher: H,
    tokens: T,
}

impl<R, H, T> LoginUserService<R, H, T>
where
    R: UserRepository,
    H: PasswordHasher,
    T: TokenProvider,
{
    pub fn new(users: R, hasher: H, tokens: T) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<R, H, T> LoginUserUseCase for LoginUserService<R, H, T>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
    T: TokenProvider + Send + Sync,
{
    async fn execute(&self, credentials: LoginCredentials) -> Result<String, AppError> {
        let (email, password) = match (credentials.email, credentials.password) {
            (Some(e), Some(p)) if !e.trim().is_empty() && !p.is_empty() => (e, p),
            _ => return Err(ApiError::bad_request("Please provide an email and password").into()),
        };

        let user = match self.users.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                warn!("Login failed: unknown email");
                return Err(ApiError::unauthorized("Invalid credentials").into());
            }
        };

        if !self
            .hasher
            .verify_password(&password, &user.password_hash)
            .await?
        {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(ApiError::unauthorized("Invalid credentials").into());
        }

        info!(user_id = %user.id, "User logged in");
        Ok(self.tokens.generate_token(user.id, user.role)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::auth::application::ports::outgoing::password_hasher::MockPasswordHasher;
    use crate::auth::application::ports::outgoing::user_repository::MockUserRepository;
    use crate::tests::support::auth_helper::jwt_service;
    use crate::tests::support::fixtures::sample_user;

    fn credentials(email: &str, password: &str) -> LoginCredentials {
        LoginCredentials {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    fn hasher(matches: bool) -> MockPasswordHasher {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_verify_password()
            .returning(move |_, _| Ok(matches));
        hasher
    }

    #[tokio::test]
    async fn test_login_success() {
        let user = sample_user(Role::User);
        let user_id = user.id;

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .withf(|email| email == "john@gmail.com")
            .returning(move |_| Ok(Some(user.clone())));

        let jwt = jwt_service();
        let service = LoginUserService::new(users, hasher(true), jwt.clone());

        let token = service
            .execute(credentials("john@gmail.com", "123456"))
            .await
            .unwrap();

        assert_eq!(jwt.verify_token(&token).unwrap().sub, user_id);
    }

    #[tokio::test]
    async fn test_missing_fields_is_bad_request() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().times(0);

        let service = LoginUserService::new(users, hasher(true), jwt_service());

        let err = service
            .execute(LoginCredentials {
                email: Some("john@gmail.com".to_string()),
                password: None,
            })
            .await
            .unwrap_err()
            .normalize();

        assert_eq!(err.status.as_u16(), 400);
        assert_eq!(err.message, "Please provide an email and password");
    }

    #[tokio::test]
    async fn test_unknown_email_and_wrong_password_look_alike() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        let unknown = LoginUserService::new(users, hasher(true), jwt_service())
            .execute(credentials("nobody@gmail.com", "123456"))
            .await
            .unwrap_err()
            .normalize();

        let user = sample_user(Role::User);
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));
        let wrong = LoginUserService::new(users, hasher(false), jwt_service())
            .execute(credentials("john@gmail.com", "nope123"))
            .await
            .unwrap_err()
            .normalize();

        assert_eq!(unknown, wrong);
        assert_eq!(wrong.status.as_u16(), 401);
        assert_eq!(wrong.message, "Invalid credentials");
    }
}
