use actix_web::{get, web};

use crate::api::schemas::EmptyResponse;
use crate::shared::api::{ApiResponse, ApiResult, EmptyData};
use crate::AppState;

/// Log out
///
/// Overwrites the `token` cookie with a short-lived placeholder.
#[utoipa::path(
    get,
    path = "/api/v1/auth/logout",
    tag = "auth",
    responses((status = 200, description = "Logged out", body = EmptyResponse))
)]
#[get("/api/v1/auth/logout")]
pub async fn logout_user_handler(data: web::Data<AppState>) -> ApiResult {
    Ok(ApiResponse::success_with_cookie(
        EmptyData {},
        data.token_cookie.cleared(),
    ))
}
