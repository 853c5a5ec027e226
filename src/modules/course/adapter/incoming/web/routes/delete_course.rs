use actix_web::{delete, web};
use uuid::Uuid;

use crate::api::schemas::{EmptyResponse, ErrorResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::Role;
use crate::shared::api::{ApiResponse, ApiResult};
use crate::AppState;

/// Delete a course
#[utoipa::path(
    delete,
    path = "/api/v1/courses/{id}",
    tag = "courses",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Deleted", body = EmptyResponse),
        (status = 401, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "No such course", body = ErrorResponse),
    )
)]
#[delete("/api/v1/courses/{id}")]
pub async fn delete_course_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> ApiResult {
    let principal = user.require_role(&[Role::Publisher, Role::Admin])?;

    data.courses
        .delete
        .execute(principal, path.into_inner())
        .await?;
    Ok(ApiResponse::empty())
}
