use actix_web::{put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, TokenResponse};
use crate::shared::api::ApiResult;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ResetPasswordRequest {
    #[serde(default)]
    #[schema(example = "1234567")]
    pub password: Option<String>,
}

/// Set a new password using an emailed reset token
#[utoipa::path(
    put,
    path = "/api/v1/auth/resetpassword/{resettoken}",
    tag = "auth",
    params(("resettoken" = String, Path, description = "Plain token from the reset email")),
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password reset, logged in", body = TokenResponse),
        (status = 400, description = "Invalid or expired token", body = ErrorResponse),
    )
)]
#[put("/api/v1/auth/resetpassword/{resettoken}")]
pub async fn reset_password_handler(
    path: web::Path<String>,
    req: web::Json<ResetPasswordRequest>,
    data: web::Data<AppState>,
) -> ApiResult {
    let reset_token = path.into_inner();

    let token = data
        .auth
        .reset_password
        .execute(&reset_token, req.into_inner().password)
        .await?;

    Ok(data.token_cookie.token_response(token))
}
