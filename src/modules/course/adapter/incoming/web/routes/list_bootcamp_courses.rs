use actix_web::{get, web};
use uuid::Uuid;

use crate::api::schemas::{CourseCollectionResponse, ErrorResponse};
use crate::shared::api::{ApiResponse, ApiResult};
use crate::AppState;

/// Courses of a bootcamp
#[utoipa::path(
    get,
    path = "/api/v1/bootcamps/{bootcampId}/courses",
    tag = "courses",
    params(("bootcampId" = Uuid, Path, description = "Bootcamp id")),
    responses(
        (status = 200, description = "Every course of the bootcamp", body = CourseCollectionResponse),
        (status = 404, description = "Malformed bootcamp id", body = ErrorResponse),
    )
)]
#[get("/api/v1/bootcamps/{bootcampId}/courses")]
pub async fn list_bootcamp_courses_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> ApiResult {
    let courses = data
        .courses
        .list_for_bootcamp
        .execute(path.into_inner())
        .await?;

    Ok(ApiResponse::list(courses))
}
