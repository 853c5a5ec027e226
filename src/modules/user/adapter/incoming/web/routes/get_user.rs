use actix_web::{get, web};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, UserResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::Role;
use crate::shared::api::{ApiResponse, ApiResult};
use crate::AppState;

/// Get a user
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = UserResponse),
        (status = 404, description = "No such user", body = ErrorResponse),
    )
)]
#[get("/api/v1/users/{id}")]
pub async fn get_user_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> ApiResult {
    user.require_role(&[Role::Admin])?;

    let found = data.users.get.execute(path.into_inner()).await?;
    Ok(ApiResponse::success(found))
}
