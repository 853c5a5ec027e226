use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, ReviewResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::Role;
use crate::review::application::domain::schema::ReviewDraft;
use crate::shared::api::{ApiResponse, ApiResult};
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateReviewRequest {
    #[serde(default)]
    #[schema(example = "Learned a ton!")]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    #[schema(example = 8)]
    pub rating: Option<i32>,
}

/// Review a bootcamp
///
/// One review per user and bootcamp.
#[utoipa::path(
    post,
    path = "/api/v1/bootcamps/{bootcampId}/reviews",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(("bootcampId" = Uuid, Path, description = "Bootcamp id")),
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Created", body = ReviewResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 403, description = "Publishers cannot review", body = ErrorResponse),
        (status = 404, description = "No such bootcamp", body = ErrorResponse),
        (status = 409, description = "Already reviewed", body = ErrorResponse),
    )
)]
#[post("/api/v1/bootcamps/{bootcampId}/reviews")]
pub async fn create_review_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<CreateReviewRequest>,
    data: web::Data<AppState>,
) -> ApiResult {
    let principal = user.require_role(&[Role::User, Role::Admin])?;

    let dto = req.into_inner();
    let review = data
        .reviews
        .create
        .execute(
            principal,
            path.into_inner(),
            ReviewDraft {
                title: dto.title,
                text: dto.text,
                rating: dto.rating,
            },
        )
        .await?;

    Ok(ApiResponse::created(review))
}
