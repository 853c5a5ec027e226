use actix_multipart::Multipart;
use actix_web::{put, web};
use futures::StreamExt;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::Role;
use crate::bootcamp::application::domain::upload_policy::PhotoUpload;
use crate::shared::api::{ApiResponse, ApiResult};
use crate::AppState;

const FILE_FIELD: &str = "file";

/// Multipart body of a photo upload.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct PhotoForm {
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

/// Upload a bootcamp photo
///
/// Multipart field `file`, an image no larger than `MAX_FILE_UPLOAD` bytes.
/// Answers the stored file name.
#[utoipa::path(
    put,
    path = "/api/v1/bootcamps/{id}/photo",
    tag = "bootcamps",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Bootcamp id")),
    request_body(content = PhotoForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Stored file name", body = MessageResponse),
        (status = 400, description = "Missing, non-image or oversized file", body = ErrorResponse),
        (status = 401, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "No such bootcamp", body = ErrorResponse),
        (status = 500, description = "Problem with file upload", body = ErrorResponse),
    )
)]
#[put("/api/v1/bootcamps/{id}/photo")]
pub async fn upload_photo_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: Multipart,
    data: web::Data<AppState>,
) -> ApiResult {
    let principal = user.require_role(&[Role::Publisher, Role::Admin])?;

    let upload = read_file_field(payload, data.photo_upload.max_file_size).await;
    let file_name = data
        .bootcamps
        .upload_photo
        .execute(principal, path.into_inner(), upload)
        .await?;

    Ok(ApiResponse::success(file_name))
}

/// The `file` field, if the body is a readable multipart form that has one.
/// Keeps at most `max + 1` bytes but counts everything.
async fn read_file_field(mut payload: Multipart, max: usize) -> Option<PhotoUpload> {
    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(e) => {
                tracing::debug!(error = %e, "Unreadable multipart body");
                return None;
            }
        };

        let disposition = field.content_disposition().cloned();
        let is_file = disposition
            .as_ref()
            .and_then(|cd| cd.get_name())
            .is_some_and(|name| name == FILE_FIELD);

        if !is_file {
            while let Some(chunk) = field.next().await {
                chunk.ok()?;
            }
            continue;
        }

        let file_name = disposition
            .as_ref()
            .and_then(|cd| cd.get_filename())
            .unwrap_or_default()
            .to_string();
        let content_type = field.content_type().map(|m| m.essence_str().to_string());

        let mut bytes = Vec::new();
        let mut size = 0usize;
        while let Some(chunk) = field.next().await {
            let chunk = chunk.ok()?;
            size += chunk.len();
            if bytes.len() <= max {
                let room = max + 1 - bytes.len();
                bytes.extend_from_slice(&chunk[..chunk.len().min(room)]);
            }
        }

        return Some(PhotoUpload {
            file_name,
            content_type,
            bytes,
            size,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Principal;
    use crate::bootcamp::application::domain::upload_policy::PhotoUploadPolicy;
    use crate::bootcamp::application::ports::incoming::use_cases::UploadPhotoUseCase;
    use crate::shared::api::AppError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{authenticator, bearer};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    const BOUNDARY: &str = "devcamperboundary";

    /// Applies the default policy the way the real use case does.
    struct ChecksUpload;

    #[async_trait]
    impl UploadPhotoUseCase for ChecksUpload {
        async fn execute(
            &self,
            _principal: Principal,
            id: Uuid,
            upload: Option<PhotoUpload>,
        ) -> Result<String, AppError> {
            let upload = PhotoUploadPolicy::default().check(upload.as_ref())?;
            assert_eq!(upload.bytes, b"jpeg-bytes");
            Ok(PhotoUploadPolicy::file_name(id, &upload.file_name))
        }
    }

    fn multipart(field: &str, content_type: &str) -> String {
        format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"{f}\"; filename=\"campus.jpg\"\r\n\
             Content-Type: {ct}\r\n\r\njpeg-bytes\r\n--{b}--\r\n",
            b = BOUNDARY,
            f = field,
            ct = content_type
        )
    }

    async fn call(body: String, content_type: String) -> (Uuid, actix_web::dev::ServiceResponse) {
        let state = TestAppStateBuilder::default()
            .with_bootcamps(|uc| uc.upload_photo = Arc::new(ChecksUpload))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(authenticator())
                .service(upload_photo_handler),
        )
        .await;

        let id = Uuid::new_v4();
        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/bootcamps/{}/photo", id))
            .insert_header(bearer(Uuid::new_v4(), Role::Publisher))
            .insert_header(("Content-Type", content_type))
            .set_payload(body)
            .to_request();

        (id, test::call_service(&app, req).await)
    }

    fn form_type() -> String {
        format!("multipart/form-data; boundary={}", BOUNDARY)
    }

    #[actix_web::test]
    async fn test_image_is_stored_under_bootcamp_name() {
        let (id, resp) = call(multipart("file", "image/jpeg"), form_type()).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"], format!("photo_{}.jpg", id));
    }

    #[actix_web::test]
    async fn test_non_image_is_400() {
        let (_, resp) = call(multipart("file", "application/pdf"), form_type()).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Please upload an image file.");
    }

    #[actix_web::test]
    async fn test_missing_file_field_is_400() {
        let (_, resp) = call(multipart("avatar", "image/jpeg"), form_type()).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Please upload a file");
    }

    #[actix_web::test]
    async fn test_non_multipart_body_is_400() {
        let (_, resp) = call("{}".to_string(), "application/json".to_string()).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Please upload a file");
    }
}
