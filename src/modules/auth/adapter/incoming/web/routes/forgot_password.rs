use actix_web::{post, web, HttpRequest};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::shared::api::{ApiResponse, ApiResult};
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ForgotPasswordRequest {
    #[serde(default)]
    #[schema(example = "john@gmail.com")]
    pub email: Option<String>,
}

/// Request a password reset email
#[utoipa::path(
    post,
    path = "/api/v1/auth/forgotpassword",
    tag = "auth",
    request_body = ForgotPasswordRequest,
    responses(
        (status = 200, description = "Reset link emailed", body = MessageResponse),
        (status = 404, description = "No user with that email", body = ErrorResponse),
        (status = 500, description = "Email could not be sent", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/forgotpassword")]
pub async fn forgot_password_handler(
    http: HttpRequest,
    req: web::Json<ForgotPasswordRequest>,
    data: web::Data<AppState>,
) -> ApiResult {
    let origin = {
        let info = http.connection_info();
        format!("{}://{}", info.scheme(), info.host())
    };

    data.auth
        .forgot_password
        .execute(req.into_inner().email, &origin)
        .await?;

    Ok(ApiResponse::success("Email sent"))
}
