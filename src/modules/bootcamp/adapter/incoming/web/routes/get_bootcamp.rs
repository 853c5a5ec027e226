use actix_web::{get, web};
use uuid::Uuid;

use crate::api::schemas::{BootcampResponse, ErrorResponse};
use crate::shared::api::{ApiResponse, ApiResult};
use crate::AppState;

/// Get a bootcamp
#[utoipa::path(
    get,
    path = "/api/v1/bootcamps/{id}",
    tag = "bootcamps",
    params(("id" = Uuid, Path, description = "Bootcamp id")),
    responses(
        (status = 200, description = "The bootcamp", body = BootcampResponse),
        (status = 404, description = "No such bootcamp", body = ErrorResponse),
    )
)]
#[get("/api/v1/bootcamps/{id}")]
pub async fn get_bootcamp_handler(path: web::Path<Uuid>, data: web::Data<AppState>) -> ApiResult {
    let bootcamp = data.bootcamps.get.execute(path.into_inner()).await?;
    Ok(ApiResponse::success(bootcamp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootcamp::application::domain::entities::Bootcamp;
    use crate::bootcamp::application::ports::incoming::use_cases::GetBootcampUseCase;
    use crate::shared::api::{json_config::custom_path_config, ApiError, AppError};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::sample_bootcamp;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct Known(Uuid);

    #[async_trait]
    impl GetBootcampUseCase for Known {
        async fn execute(&self, id: Uuid) -> Result<Bootcamp, AppError> {
            if id == self.0 {
                Ok(Bootcamp {
                    id,
                    ..sample_bootcamp(Uuid::new_v4())
                })
            } else {
                Err(ApiError::not_found(format!("Bootcamp not found with id of {}", id)).into())
            }
        }
    }

    async fn call(known: Uuid, uri: &str) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_bootcamps(|uc| uc.get = Arc::new(Known(known)))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_path_config())
                .service(get_bootcamp_handler),
        )
        .await;

        test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await
    }

    #[actix_web::test]
    async fn test_get_existing_bootcamp() {
        let id = Uuid::new_v4();
        let resp = call(id, &format!("/api/v1/bootcamps/{}", id)).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], id.to_string());
        assert_eq!(body["data"]["slug"], "devworks-bootcamp");
        assert!(body.get("count").is_none());
    }

    #[actix_web::test]
    async fn test_unknown_bootcamp_is_404() {
        let id = Uuid::new_v4();
        let resp = call(Uuid::new_v4(), &format!("/api/v1/bootcamps/{}", id)).await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            serde_json::json!({
                "success": false,
                "error": format!("Bootcamp not found with id of {}", id)
            })
        );
    }

    #[actix_web::test]
    async fn test_malformed_id_is_resource_not_found() {
        let resp = call(Uuid::new_v4(), "/api/v1/bootcamps/5d725a1b7b292f5f8ceff78").await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Resource not found");
    }
}
