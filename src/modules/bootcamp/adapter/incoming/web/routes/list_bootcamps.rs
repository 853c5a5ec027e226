use actix_web::{get, web};

use crate::api::schemas::{BootcampListResponse, ErrorResponse};
use crate::shared::api::{ApiResponse, ApiResult};
use crate::shared::query::ListQuery;
use crate::AppState;

/// List bootcamps
///
/// Each bootcamp carries its courses. Filters apply to `name`, `slug`,
/// `careers`, `averageRating`, `averageCost`, the four flags,
/// `location.city`, `location.state`, `location.zipcode`, `user` and
/// `createdAt`, e.g. `?careers[in]=Business&averageCost[lte]=10000`.
#[utoipa::path(
    get,
    path = "/api/v1/bootcamps",
    tag = "bootcamps",
    responses(
        (status = 200, description = "One page of bootcamps", body = BootcampListResponse),
        (status = 400, description = "Invalid query", body = ErrorResponse),
    )
)]
#[get("/api/v1/bootcamps")]
pub async fn list_bootcamps_handler(query: ListQuery, data: web::Data<AppState>) -> ApiResult {
    // Courses are embedded whatever the selection.
    let fields = query.select.clone().map(|mut fields| {
        fields.push("courses".to_string());
        fields
    });

    let page = data.bootcamps.list.execute(query).await?;
    Ok(ApiResponse::page(page.select(fields.as_deref())?))
}
