use actix_web::{get, web};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, ReviewResponse};
use crate::shared::api::{ApiResponse, ApiResult};
use crate::AppState;

/// Get a review
#[utoipa::path(
    get,
    path = "/api/v1/reviews/{id}",
    tag = "reviews",
    params(("id" = Uuid, Path, description = "Review id")),
    responses(
        (status = 200, description = "The review with its bootcamp summary", body = ReviewResponse),
        (status = 404, description = "No such review", body = ErrorResponse),
    )
)]
#[get("/api/v1/reviews/{id}")]
pub async fn get_review_handler(path: web::Path<Uuid>, data: web::Data<AppState>) -> ApiResult {
    let review = data.reviews.get.execute(path.into_inner()).await?;
    Ok(ApiResponse::success(review))
}
