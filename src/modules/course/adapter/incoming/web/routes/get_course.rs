use actix_web::{get, web};
use uuid::Uuid;

use crate::api::schemas::{CourseResponse, ErrorResponse};
use crate::shared::api::{ApiResponse, ApiResult};
use crate::AppState;

/// Get a course
#[utoipa::path(
    get,
    path = "/api/v1/courses/{id}",
    tag = "courses",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "The course with its bootcamp summary", body = CourseResponse),
        (status = 404, description = "No such course", body = ErrorResponse),
    )
)]
#[get("/api/v1/courses/{id}")]
pub async fn get_course_handler(path: web::Path<Uuid>, data: web::Data<AppState>) -> ApiResult {
    let course = data.courses.get.execute(path.into_inner()).await?;
    Ok(ApiResponse::success(course))
}
