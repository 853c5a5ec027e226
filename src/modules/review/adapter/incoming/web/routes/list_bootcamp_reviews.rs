use actix_web::{get, web};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, ReviewCollectionResponse};
use crate::shared::api::{ApiResponse, ApiResult};
use crate::AppState;

/// Reviews of a bootcamp
#[utoipa::path(
    get,
    path = "/api/v1/bootcamps/{bootcampId}/reviews",
    tag = "reviews",
    params(("bootcampId" = Uuid, Path, description = "Bootcamp id")),
    responses(
        (status = 200, description = "Every review of the bootcamp", body = ReviewCollectionResponse),
        (status = 404, description = "Malformed bootcamp id", body = ErrorResponse),
    )
)]
#[get("/api/v1/bootcamps/{bootcampId}/reviews")]
pub async fn list_bootcamp_reviews_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> ApiResult {
    let reviews = data
        .reviews
        .list_for_bootcamp
        .execute(path.into_inner())
        .await?;

    Ok(ApiResponse::list(reviews))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::application::domain::entities::Review;
    use crate::review::application::ports::incoming::ListBootcampReviewsUseCase;
    use crate::shared::api::AppError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::shared::api::json_config::custom_path_config;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct NoReviews;

    #[async_trait]
    impl ListBootcampReviewsUseCase for NoReviews {
        async fn execute(&self, _bootcamp_id: Uuid) -> Result<Vec<Review>, AppError> {
            Ok(vec![])
        }
    }

    async fn get(uri: &str) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_reviews(|uc| uc.list_for_bootcamp = Arc::new(NoReviews))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_path_config())
                .service(list_bootcamp_reviews_handler),
        )
        .await;

        test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await
    }

    #[actix_web::test]
    async fn test_bootcamp_without_reviews() {
        let resp = get(&format!("/api/v1/bootcamps/{}/reviews", Uuid::new_v4())).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["count"], 0);
        assert_eq!(body["data"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn test_malformed_bootcamp_id_is_404() {
        let resp = get("/api/v1/bootcamps/not-a-uuid/reviews").await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }
}
