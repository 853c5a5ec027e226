use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{CourseResponse, ErrorResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::Role;
use crate::course::application::domain::schema::CourseDraft;
use crate::shared::api::{ApiResponse, ApiResult};
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    #[serde(default)]
    #[schema(example = "Front End Web Development")]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[schema(example = "8")]
    pub weeks: Option<String>,
    #[serde(default)]
    #[schema(example = 8000)]
    pub tuition: Option<i32>,
    /// `beginner`, `intermediate` or `advanced`
    #[serde(default)]
    #[schema(example = "beginner")]
    pub minimum_skill: Option<String>,
    #[serde(default)]
    pub scholarship_available: Option<bool>,
}

/// Add a course to a bootcamp
#[utoipa::path(
    post,
    path = "/api/v1/bootcamps/{bootcampId}/courses",
    tag = "courses",
    security(("bearer_auth" = [])),
    params(("bootcampId" = Uuid, Path, description = "Bootcamp id")),
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Created", body = CourseResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Not the bootcamp owner", body = ErrorResponse),
        (status = 404, description = "No such bootcamp", body = ErrorResponse),
    )
)]
#[post("/api/v1/bootcamps/{bootcampId}/courses")]
pub async fn create_course_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<CreateCourseRequest>,
    data: web::Data<AppState>,
) -> ApiResult {
    let principal = user.require_role(&[Role::Publisher, Role::Admin])?;

    let dto = req.into_inner();
    let course = data
        .courses
        .create
        .execute(
            principal,
            path.into_inner(),
            CourseDraft {
                title: dto.title,
                description: dto.description,
                weeks: dto.weeks,
                tuition: dto.tuition,
                minimum_skill: dto.minimum_skill,
                scholarship_available: dto.scholarship_available,
            },
        )
        .await?;

    Ok(ApiResponse::created(course))
}
