use actix_web::{put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{CourseResponse, ErrorResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::Role;
use crate::course::application::ports::incoming::CoursePatch;
use crate::shared::api::{ApiResponse, ApiResult};
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub title: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub weeks: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<i32>)]
    pub tuition: PatchField<i32>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub minimum_skill: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<bool>)]
    pub scholarship_available: PatchField<bool>,
}

/// Update a course
#[utoipa::path(
    put,
    path = "/api/v1/courses/{id}",
    tag = "courses",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Course id")),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Updated course", body = CourseResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "No such course", body = ErrorResponse),
    )
)]
#[put("/api/v1/courses/{id}")]
pub async fn update_course_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateCourseRequest>,
    data: web::Data<AppState>,
) -> ApiResult {
    let principal = user.require_role(&[Role::Publisher, Role::Admin])?;

    let dto = req.into_inner();
    let course = data
        .courses
        .update
        .execute(
            principal,
            path.into_inner(),
            CoursePatch {
                title: dto.title,
                description: dto.description,
                weeks: dto.weeks,
                tuition: dto.tuition,
                minimum_skill: dto.minimum_skill,
                scholarship_available: dto.scholarship_available,
            },
        )
        .await?;

    Ok(ApiResponse::success(course))
}
