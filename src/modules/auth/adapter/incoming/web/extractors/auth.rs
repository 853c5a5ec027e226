use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures::future::{FutureExt, LocalBoxFuture};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Principal, Role};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::ports::outgoing::user_repository::UserRepository;
use crate::shared::api::{ApiError, AppError};

pub const TOKEN_COOKIE: &str = "token";
const NOT_AUTHORIZED: &str = "Not authorized to access this route";

/// Verifies session tokens and reloads their subject, so a role change or a
/// deleted account takes effect on the next request.
#[derive(Clone)]
pub struct Authenticator {
    tokens: Arc<dyn TokenProvider + Send + Sync>,
    users: Arc<dyn UserRepository>,
}

impl Authenticator {
    pub fn new(
        tokens: Arc<dyn TokenProvider + Send + Sync>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self { tokens, users }
    }

    pub async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let claims = self.tokens.verify_token(token).map_err(|e| {
            tracing::debug!(error = %e, "Rejected bearer token");
            AppError::from(ApiError::unauthorized(NOT_AUTHORIZED))
        })?;

        match self.users.find_by_id(claims.sub).await? {
            Some(user) => {
                if user.role != claims.role {
                    tracing::debug!(
                        user_id = %user.id,
                        claimed = %claims.role,
                        stored = %user.role,
                        "Token role is stale"
                    );
                }
                Ok(AuthenticatedUser {
                    user_id: user.id,
                    role: user.role,
                })
            }
            None => {
                tracing::debug!(user_id = %claims.sub, "Token subject no longer exists");
                Err(ApiError::unauthorized(NOT_AUTHORIZED).into())
            }
        }
    }
}

/// Caller proven by a valid token in the `Authorization: Bearer` header or
/// the `token` cookie. The role is the stored one, not the token claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn principal(&self) -> Principal {
        Principal::new(self.user_id, self.role)
    }

    /// Role gate: 403 unless the caller holds one of `allowed`.
    pub fn require_role(&self, allowed: &[Role]) -> Result<Principal, AppError> {
        if allowed.contains(&self.role) {
            Ok(self.principal())
        } else {
            Err(ApiError::forbidden(format!(
                "User role {} is not authorized to access this route",
                self.role
            ))
            .into())
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let authenticator = req.app_data::<web::Data<Authenticator>>().cloned();
        let token = extract_token(req);

        async move {
            let authenticator = authenticator.ok_or_else(|| {
                AppError::unrecovered("authenticator is not registered as app data")
            })?;
            let token = token
                .ok_or_else(|| AppError::from(ApiError::unauthorized(NOT_AUTHORIZED)))?;

            authenticator.authenticate(&token).await
        }
        .boxed_local()
    }
}

fn extract_token(req: &HttpRequest) -> Option<String> {
    extract_token_from_header(req).or_else(|| {
        req.cookie(TOKEN_COOKIE)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty() && v != "none")
    })
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
