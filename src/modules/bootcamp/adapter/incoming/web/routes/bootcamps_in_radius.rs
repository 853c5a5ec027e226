use actix_web::{get, web};

use crate::api::schemas::{BootcampRadiusResponse, ErrorResponse};
use crate::bootcamp::application::service::INVALID_DISTANCE;
use crate::shared::api::{ApiError, ApiResponse, ApiResult};
use crate::AppState;

/// Bootcamps within a distance
///
/// `distance` is in miles from the centre of `zipcode`.
#[utoipa::path(
    get,
    path = "/api/v1/bootcamps/radius/{zipcode}/{distance}",
    tag = "bootcamps",
    params(
        ("zipcode" = String, Path, description = "Postal code of the centre"),
        ("distance" = f64, Path, description = "Radius in miles"),
    ),
    responses(
        (status = 200, description = "Every bootcamp in range", body = BootcampRadiusResponse),
        (status = 400, description = "Invalid distance", body = ErrorResponse),
        (status = 500, description = "Postal code could not be geocoded", body = ErrorResponse),
    )
)]
#[get("/api/v1/bootcamps/radius/{zipcode}/{distance}")]
pub async fn bootcamps_in_radius_handler(
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> ApiResult {
    let (zipcode, distance) = path.into_inner();
    let distance = distance
        .trim()
        .parse::<f64>()
        .map_err(|_| ApiError::bad_request(INVALID_DISTANCE))?;

    let bootcamps = data
        .bootcamps
        .in_radius
        .execute(zipcode.trim(), distance)
        .await?;

    Ok(ApiResponse::list(bootcamps))
}
