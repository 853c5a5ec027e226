use actix_web::{put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{BootcampResponse, ErrorResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::Role;
use crate::bootcamp::application::ports::incoming::use_cases::BootcampPatch;
use crate::shared::api::{ApiResponse, ApiResult};
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBootcampRequest {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub name: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub website: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub phone: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub email: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub address: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<Vec<String>>)]
    pub careers: PatchField<Vec<String>>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<bool>)]
    pub housing: PatchField<bool>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<bool>)]
    pub job_assistance: PatchField<bool>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<bool>)]
    pub job_guarantee: PatchField<bool>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<bool>)]
    pub accept_gi: PatchField<bool>,
}

impl From<UpdateBootcampRequest> for BootcampPatch {
    fn from(dto: UpdateBootcampRequest) -> Self {
        BootcampPatch {
            name: dto.name,
            description: dto.description,
            website: dto.website,
            phone: dto.phone,
            email: dto.email,
            address: dto.address,
            careers: dto.careers,
            housing: dto.housing,
            job_assistance: dto.job_assistance,
            job_guarantee: dto.job_guarantee,
            accept_gi: dto.accept_gi,
        }
    }
}

/// Update a bootcamp
///
/// Omitted fields keep their value; `null` clears an optional field. A new
/// `address` is geocoded again.
#[utoipa::path(
    put,
    path = "/api/v1/bootcamps/{id}",
    tag = "bootcamps",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Bootcamp id")),
    request_body = UpdateBootcampRequest,
    responses(
        (status = 200, description = "Updated bootcamp", body = BootcampResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "No such bootcamp", body = ErrorResponse),
    )
)]
#[put("/api/v1/bootcamps/{id}")]
pub async fn update_bootcamp_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateBootcampRequest>,
    data: web::Data<AppState>,
) -> ApiResult {
    let principal = user.require_role(&[Role::Publisher, Role::Admin])?;

    let bootcamp = data
        .bootcamps
        .update
        .execute(principal, path.into_inner(), req.into_inner().into())
        .await?;

    Ok(ApiResponse::success(bootcamp))
}
