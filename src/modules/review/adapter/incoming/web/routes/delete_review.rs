use actix_web::{delete, web};
use uuid::Uuid;

use crate::api::schemas::{EmptyResponse, ErrorResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::Role;
use crate::shared::api::{ApiResponse, ApiResult};
use crate::AppState;

/// Delete a review
#[utoipa::path(
    delete,
    path = "/api/v1/reviews/{id}",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Review id")),
    responses(
        (status = 200, description = "Deleted", body = EmptyResponse),
        (status = 401, description = "Not the author", body = ErrorResponse),
        (status = 404, description = "No such review", body = ErrorResponse),
    )
)]
#[delete("/api/v1/reviews/{id}")]
pub async fn delete_review_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> ApiResult {
    let principal = user.require_role(&[Role::User, Role::Admin])?;

    data.reviews
        .delete
        .execute(principal, path.into_inner())
        .await?;
    Ok(ApiResponse::empty())
}
