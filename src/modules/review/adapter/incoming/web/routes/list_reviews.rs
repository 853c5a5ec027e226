use actix_web::{get, web};

use crate::api::schemas::{ErrorResponse, ReviewListResponse};
use crate::shared::api::{ApiResponse, ApiResult};
use crate::shared::query::ListQuery;
use crate::AppState;

/// List reviews
#[utoipa::path(
    get,
    path = "/api/v1/reviews",
    tag = "reviews",
    responses(
        (status = 200, description = "One page of reviews", body = ReviewListResponse),
        (status = 400, description = "Invalid query", body = ErrorResponse),
    )
)]
#[get("/api/v1/reviews")]
pub async fn list_reviews_handler(query: ListQuery, data: web::Data<AppState>) -> ApiResult {
    let fields = query.select.clone();
    let page = data.reviews.list.execute(query).await?;

    Ok(ApiResponse::page(page.select(fields.as_deref())?))
}
