use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, TokenResponse};
use crate::auth::application::ports::incoming::use_cases::LoginCredentials;
use crate::shared::api::ApiResult;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "john@gmail.com")]
    #[serde(default)]
    pub email: Option<String>,
    #[schema(example = "123456")]
    #[serde(default)]
    pub password: Option<String>,
}

/// Log in
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = TokenResponse),
        (status = 400, description = "Email or password missing", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> ApiResult {
    let dto = req.into_inner();

    let token = data
        .auth
        .login
        .execute(LoginCredentials {
            email: dto.email,
            password: dto.password,
        })
        .await?;

    Ok(data.token_cookie.token_response(token))
}
