use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, UserResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::Role;
use crate::auth::application::domain::schema::UserDraft;
use crate::shared::api::{ApiResponse, ApiResult};
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    #[serde(default)]
    #[schema(example = "Jane Admin")]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(example = "jane@devcamper.io")]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    /// `user` (default), `publisher` or `admin`
    #[serde(default)]
    #[schema(example = "admin")]
    pub role: Option<String>,
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Created", body = UserResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
    )
)]
#[post("/api/v1/users")]
pub async fn create_user_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateUserRequest>,
    data: web::Data<AppState>,
) -> ApiResult {
    user.require_role(&[Role::Admin])?;

    let dto = req.into_inner();
    let created = data
        .users
        .create
        .execute(UserDraft {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            role: dto.role,
        })
        .await?;

    Ok(ApiResponse::created(created))
}
