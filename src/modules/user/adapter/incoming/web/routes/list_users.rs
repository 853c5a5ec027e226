use actix_web::{get, web};

use crate::api::schemas::{ErrorResponse, UserListResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::Role;
use crate::shared::api::{ApiResponse, ApiResult};
use crate::shared::query::ListQuery;
use crate::AppState;

/// List users
///
/// Accepts the shared list query: `select`, `sort`, `page`, `limit` and
/// field filters on `name`, `email`, `role`, `createdAt`.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "One page of users", body = UserListResponse),
        (status = 400, description = "Invalid query", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
    )
)]
#[get("/api/v1/users")]
pub async fn list_users_handler(
    user: AuthenticatedUser,
    query: ListQuery,
    data: web::Data<AppState>,
) -> ApiResult {
    user.require_role(&[Role::Admin])?;

    let fields = query.select.clone();
    let page = data.users.list.execute(query).await?;

    Ok(ApiResponse::page(page.select(fields.as_deref())?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::incoming::web::extractors::Authenticator;
    use crate::auth::application::domain::entities::User;
    use crate::shared::api::AppError;
    use crate::shared::query::Page;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::auth::application::ports::outgoing::user_repository::MockUserRepository;
    use crate::tests::support::auth_helper::{authenticator, authenticator_with, bearer};
    use crate::tests::support::fixtures::sample_user;
    use crate::user::application::ports::incoming::ListUsersUseCase;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;
    use uuid::Uuid;

    struct TwoOfThree;

    #[async_trait]
    impl ListUsersUseCase for TwoOfThree {
        async fn execute(&self, query: ListQuery) -> Result<Page<User>, AppError> {
            Ok(Page {
                items: vec![sample_user(Role::User), sample_user(Role::Publisher)],
                total: 3,
                page: query.page,
                limit: query.limit,
            })
        }
    }

    async fn call(role: Role, uri: &str) -> actix_web::dev::ServiceResponse {
        call_as(authenticator(), Uuid::new_v4(), role, uri).await
    }

    async fn call_as(
        auth: web::Data<Authenticator>,
        user_id: Uuid,
        claimed: Role,
        uri: &str,
    ) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_users(|uc| uc.list = Arc::new(TwoOfThree))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(auth)
                .service(list_users_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(bearer(user_id, claimed))
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_admin_lists_selected_fields_with_pagination() {
        let resp = call(Role::Admin, "/api/v1/users?select=name&limit=2").await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["count"], 2);
        assert_eq!(body["pagination"]["next"]["page"], 2);

        let first = body["data"][0].as_object().unwrap();
        assert!(first.contains_key("id"));
        assert!(first.contains_key("name"));
        assert!(!first.contains_key("email"));
    }

    #[actix_web::test]
    async fn test_publisher_is_forbidden() {
        let resp = call(Role::Publisher, "/api/v1/users").await;
        assert_eq!(resp.status(), 403);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"],
            "User role publisher is not authorized to access this route"
        );
    }

    #[actix_web::test]
    async fn test_demoted_admin_is_forbidden_despite_token() {
        let demoted = sample_user(Role::User);
        let user_id = demoted.id;
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(move |_| Ok(Some(demoted.clone())));

        let resp = call_as(
            authenticator_with(users),
            user_id,
            Role::Admin,
            "/api/v1/users",
        )
        .await;

        assert_eq!(resp.status(), 403);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"],
            "User role user is not authorized to access this route"
        );
    }

    #[actix_web::test]
    async fn test_deleted_admin_is_unauthorized() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let resp = call_as(
            authenticator_with(users),
            Uuid::new_v4(),
            Role::Admin,
            "/api/v1/users",
        )
        .await;

        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Not authorized to access this route");
    }

    #[actix_web::test]
    async fn test_page_past_the_limit_is_a_bad_request() {
        let resp = call(Role::Admin, "/api/v1/users?page=18446744073709551615").await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }
}
