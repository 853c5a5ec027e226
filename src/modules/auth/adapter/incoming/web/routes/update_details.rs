use actix_web::{put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, UserResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::UpdateDetailsData;
use crate::shared::api::{ApiResponse, ApiResult};
use crate::shared::patch::PatchField;
use crate::AppState;

/// Only `name` and `email` can be changed here; anything else is ignored.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateDetailsRequest {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>, example = "Jane Doe")]
    pub name: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>, example = "jane@gmail.com")]
    pub email: PatchField<String>,
}

/// Update name and email of the current user
#[utoipa::path(
    put,
    path = "/api/v1/auth/updatedetails",
    tag = "auth",
    security(("bearer_auth" = [])),
    request_body = UpdateDetailsRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
    )
)]
#[put("/api/v1/auth/updatedetails")]
pub async fn update_details_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateDetailsRequest>,
    data: web::Data<AppState>,
) -> ApiResult {
    let dto = req.into_inner();

    let updated = data
        .auth
        .update_details
        .execute(
            user.principal(),
            UpdateDetailsData {
                name: dto.name,
                email: dto.email,
            },
        )
        .await?;

    Ok(ApiResponse::success(updated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{Principal, Role, User};
    use crate::auth::application::ports::incoming::use_cases::UpdateDetailsUseCase;
    use crate::shared::api::AppError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{authenticator, bearer};
    use crate::tests::support::fixtures::sample_user;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct RenameOnly(User);

    #[async_trait]
    impl UpdateDetailsUseCase for RenameOnly {
        async fn execute(
            &self,
            _principal: Principal,
            data: UpdateDetailsData,
        ) -> Result<User, AppError> {
            assert!(data.email.is_unset());
            let mut user = self.0.clone();
            if let PatchField::Value(name) = data.name {
                user.name = name;
            }
            Ok(user)
        }
    }

    #[actix_web::test]
    async fn test_update_details_passes_only_present_fields() {
        let me = sample_user(Role::User);
        let state = TestAppStateBuilder::default()
            .with_auth(|uc| uc.update_details = Arc::new(RenameOnly(me.clone())))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(authenticator())
                .service(update_details_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/v1/auth/updatedetails")
            .insert_header(bearer(me.id, Role::User))
            .set_json(serde_json::json!({ "name": "Jane Doe", "role": "admin" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["name"], "Jane Doe");
        assert_eq!(body["data"]["role"], "user");
    }
}
