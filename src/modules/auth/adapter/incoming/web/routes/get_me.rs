use actix_web::{get, web};

use crate::api::schemas::{ErrorResponse, UserResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::{ApiResponse, ApiResult};
use crate::AppState;

/// Current user
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The logged-in user", body = UserResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
    )
)]
#[get("/api/v1/auth/me")]
pub async fn get_me_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> ApiResult {
    let me = data.auth.me.execute(user.principal()).await?;
    Ok(ApiResponse::success(me))
}
