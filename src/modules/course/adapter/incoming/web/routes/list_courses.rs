use actix_web::{get, web};

use crate::api::schemas::{CourseListResponse, ErrorResponse};
use crate::shared::api::{ApiResponse, ApiResult};
use crate::shared::query::ListQuery;
use crate::AppState;

/// List courses
///
/// Each course embeds its bootcamp's id, name and description.
#[utoipa::path(
    get,
    path = "/api/v1/courses",
    tag = "courses",
    responses(
        (status = 200, description = "One page of courses", body = CourseListResponse),
        (status = 400, description = "Invalid query", body = ErrorResponse),
    )
)]
#[get("/api/v1/courses")]
pub async fn list_courses_handler(query: ListQuery, data: web::Data<AppState>) -> ApiResult {
    let fields = query.select.clone();
    let page = data.courses.list.execute(query).await?;

    Ok(ApiResponse::page(page.select(fields.as_deref())?))
}
