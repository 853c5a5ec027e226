use actix_web::{delete, web};
use uuid::Uuid;

use crate::api::schemas::{EmptyResponse, ErrorResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::Role;
use crate::shared::api::{ApiResponse, ApiResult};
use crate::AppState;

/// Delete a user
///
/// Bootcamps, courses and reviews owned by the user go with it.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Deleted", body = EmptyResponse),
        (status = 404, description = "No such user", body = ErrorResponse),
    )
)]
#[delete("/api/v1/users/{id}")]
pub async fn delete_user_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> ApiResult {
    user.require_role(&[Role::Admin])?;

    data.users.delete.execute(path.into_inner()).await?;
    Ok(ApiResponse::empty())
}
