use actix_web::{put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, UserResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::Role;
use crate::shared::api::{ApiResponse, ApiResult};
use crate::shared::patch::PatchField;
use crate::user::application::ports::incoming::UserPatch;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub name: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub email: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>, example = "publisher")]
    pub role: PatchField<String>,
}

/// Update a user
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "No such user", body = ErrorResponse),
    )
)]
#[put("/api/v1/users/{id}")]
pub async fn update_user_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateUserRequest>,
    data: web::Data<AppState>,
) -> ApiResult {
    user.require_role(&[Role::Admin])?;

    let dto = req.into_inner();
    let updated = data
        .users
        .update
        .execute(
            path.into_inner(),
            UserPatch {
                name: dto.name,
                email: dto.email,
                role: dto.role,
            },
        )
        .await?;

    Ok(ApiResponse::success(updated))
}
