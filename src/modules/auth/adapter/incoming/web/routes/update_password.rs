use actix_web::{put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, TokenResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::PasswordChange;
use crate::shared::api::ApiResult;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    #[serde(default)]
    #[schema(example = "123456")]
    pub current_password: Option<String>,
    #[serde(default)]
    #[schema(example = "1234567")]
    pub new_password: Option<String>,
}

/// Change the current user's password
#[utoipa::path(
    put,
    path = "/api/v1/auth/updatepassword",
    tag = "auth",
    security(("bearer_auth" = [])),
    request_body = UpdatePasswordRequest,
    responses(
        (status = 200, description = "Password changed, fresh token issued", body = TokenResponse),
        (status = 400, description = "New password too short", body = ErrorResponse),
        (status = 401, description = "Current password is incorrect", body = ErrorResponse),
    )
)]
#[put("/api/v1/auth/updatepassword")]
pub async fn update_password_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdatePasswordRequest>,
    data: web::Data<AppState>,
) -> ApiResult {
    let dto = req.into_inner();

    let token = data
        .auth
        .update_password
        .execute(
            user.principal(),
            PasswordChange {
                current_password: dto.current_password,
                new_password: dto.new_password,
            },
        )
        .await?;

    Ok(data.token_cookie.token_response(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{Principal, Role};
    use crate::auth::application::ports::incoming::use_cases::UpdatePasswordUseCase;
    use crate::shared::api::{ApiError, AppError};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{authenticator, bearer};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;
    use uuid::Uuid;

    struct ChecksCurrent;

    #[async_trait]
    impl UpdatePasswordUseCase for ChecksCurrent {
        async fn execute(
            &self,
            _principal: Principal,
            change: PasswordChange,
        ) -> Result<String, AppError> {
            if change.current_password.as_deref() == Some("123456") {
                Ok("fresh-token".to_string())
            } else {
                Err(ApiError::unauthorized("Password is incorrect").into())
            }
        }
    }

    async fn call(body: serde_json::Value) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_auth(|uc| uc.update_password = Arc::new(ChecksCurrent))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(authenticator())
                .service(update_password_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/v1/auth/updatepassword")
            .insert_header(bearer(Uuid::new_v4(), Role::User))
            .set_json(body)
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_update_password_issues_new_token() {
        let resp = call(serde_json::json!({
            "currentPassword": "123456",
            "newPassword": "1234567"
        }))
        .await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["token"], "fresh-token");
    }

    #[actix_web::test]
    async fn test_wrong_current_password() {
        let resp = call(serde_json::json!({
            "currentPassword": "nope",
            "newPassword": "1234567"
        }))
        .await;

        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Password is incorrect");
    }
}
