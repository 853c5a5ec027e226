use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::schemas::{BootcampResponse, ErrorResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::Role;
use crate::bootcamp::application::domain::schema::BootcampDraft;
use crate::shared::api::{ApiResponse, ApiResult};
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBootcampRequest {
    #[serde(default)]
    #[schema(example = "Devworks Bootcamp")]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[schema(example = "https://devworks.com")]
    pub website: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Free-form address, geocoded into `location`.
    #[serde(default)]
    #[schema(example = "233 Bay State Rd Boston MA 02215")]
    pub address: Option<String>,
    #[serde(default)]
    #[schema(example = json!(["Web Development", "UI/UX"]))]
    pub careers: Option<Vec<String>>,
    #[serde(default)]
    pub housing: Option<bool>,
    #[serde(default)]
    pub job_assistance: Option<bool>,
    #[serde(default)]
    pub job_guarantee: Option<bool>,
    #[serde(default)]
    pub accept_gi: Option<bool>,
}

impl From<CreateBootcampRequest> for BootcampDraft {
    fn from(dto: CreateBootcampRequest) -> Self {
        BootcampDraft {
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

/// Create a bootcamp
///
/// The caller becomes the owner. Publishers may own one bootcamp.
#[utoipa::path(
    post,
    path = "/api/v1/bootcamps",
    tag = "bootcamps",
    security(("bearer_auth" = [])),
    request_body = CreateBootcampRequest,
    responses(
        (status = 201, description = "Created", body = BootcampResponse),
        (status = 400, description = "Validation failed or already published", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Role not allowed", body = ErrorResponse),
        (status = 409, description = "Name already taken", body = ErrorResponse),
    )
)]
#[post("/api/v1/bootcamps")]
pub async fn create_bootcamp_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateBootcampRequest>,
    data: web::Data<AppState>,
) -> ApiResult {
    let principal = user.require_role(&[Role::Publisher, Role::Admin])?;

    let bootcamp = data
        .bootcamps
        .create
        .execute(principal, req.into_inner().into())
        .await?;

    Ok(ApiResponse::created(bootcamp))
}
