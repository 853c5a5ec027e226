use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, TokenResponse};
use crate::auth::application::domain::schema::UserDraft;
use crate::shared::api::ApiResult;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "John Doe")]
    #[serde(default)]
    pub name: Option<String>,
    #[schema(example = "john@gmail.com")]
    #[serde(default)]
    pub email: Option<String>,
    #[schema(example = "123456")]
    #[serde(default)]
    pub password: Option<String>,
    /// `user` (default) or `publisher`
    #[schema(example = "publisher")]
    #[serde(default)]
    pub role: Option<String>,
}

impl From<RegisterRequest> for UserDraft {
    fn from(req: RegisterRequest) -> Self {
        UserDraft {
            name: req.name,
            email: req.email,
            password: req.password,
            role: req.role,
        }
    }
}

/// Register a user
///
/// Creates the account and answers a token, also set as the `token` cookie.
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Registered", body = TokenResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
    )
)]
#[post("/api/v1/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterRequest>,
    data: web::Data<AppState>,
) -> ApiResult {
    let dto = req.into_inner();
    info!(email = ?dto.email, "Registration attempt");

    let token = data.auth.register.execute(dto.into()).await?;

    Ok(data.token_cookie.token_response(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::incoming::use_cases::RegisterUserUseCase;
    use crate::shared::api::{ApiError, AppError};
    use crate::shared::storage::StorageFault;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct StubRegister(fn(UserDraft) -> Result<String, AppError>);

    #[async_trait]
    impl RegisterUserUseCase for StubRegister {
        async fn execute(&self, draft: UserDraft) -> Result<String, AppError> {
            (self.0)(draft)
        }
    }

    async fn call(stub: StubRegister, body: serde_json::Value) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_auth(|uc| uc.register = Arc::new(stub))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(register_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(body)
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_register_sets_token_and_cookie() {
        let resp = call(
            StubRegister(|draft| {
                assert_eq!(draft.role.as_deref(), Some("publisher"));
                Ok("jwt-token".to_string())
            }),
            serde_json::json!({
                "name": "John Doe",
                "email": "john@gmail.com",
                "password": "123456",
                "role": "publisher"
            }),
        )
        .await;

        assert_eq!(resp.status(), 200);
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == "token")
            .expect("token cookie");
        assert_eq!(cookie.value(), "jwt-token");
        assert_eq!(cookie.http_only(), Some(true));

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["token"], "jwt-token");
    }

    #[actix_web::test]
    async fn test_register_validation_failure_envelope() {
        let resp = call(
            StubRegister(|_| {
                Err(StorageFault::validation(["Please add a name", "Please add an email"]).into())
            }),
            serde_json::json!({}),
        )
        .await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Please add a name, Please add an email");
    }

    #[actix_web::test]
    async fn test_register_duplicate_email_is_conflict() {
        let resp = call(
            StubRegister(|_| Err(StorageFault::Duplicate("users_email_key".to_string()).into())),
            serde_json::json!({ "name": "x", "email": "john@gmail.com", "password": "123456" }),
        )
        .await;

        assert_eq!(resp.status(), 409);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Duplicate field value entered");
    }

    #[actix_web::test]
    async fn test_register_explicit_error_passes_through() {
        let resp = call(
            StubRegister(|_| Err(ApiError::bad_request("nope").into())),
            serde_json::json!({}),
        )
        .await;

        assert_eq!(resp.status(), 400);
    }
}
