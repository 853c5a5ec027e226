use actix_web::{put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, ReviewResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::Role;
use crate::review::application::ports::incoming::ReviewPatch;
use crate::shared::api::{ApiResponse, ApiResult};
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateReviewRequest {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub title: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub text: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<i32>)]
    pub rating: PatchField<i32>,
}

/// Update a review
#[utoipa::path(
    put,
    path = "/api/v1/reviews/{id}",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Review id")),
    request_body = UpdateReviewRequest,
    responses(
        (status = 200, description = "Updated review", body = ReviewResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Not the author", body = ErrorResponse),
        (status = 404, description = "No such review", body = ErrorResponse),
    )
)]
#[put("/api/v1/reviews/{id}")]
pub async fn update_review_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateReviewRequest>,
    data: web::Data<AppState>,
) -> ApiResult {
    let principal = user.require_role(&[Role::User, Role::Admin])?;

    let dto = req.into_inner();
    let review = data
        .reviews
        .update
        .execute(
            principal,
            path.into_inner(),
            ReviewPatch {
                title: dto.title,
                text: dto.text,
                rating: dto.rating,
            },
        )
        .await?;

    Ok(ApiResponse::success(review))
}
