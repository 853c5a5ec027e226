use actix_web::{get, web, HttpResponse};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::shared::api::ApiResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "ok")]
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "ok")]
    pub database: Option<&'static str>,
}

/// Liveness probe. No I/O.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Process is up", body = HealthStatus))
)]
#[get("/health")]
pub async fn health_handler() -> HttpResponse {
    ApiResponse::success(HealthStatus {
        status: "ok",
        database: None,
    })
}

/// Readiness probe: the database must answer `SELECT 1`.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Ready to serve", body = HealthStatus),
        (status = 503, description = "Database unreachable", body = HealthStatus),
    )
)]
#[get("/ready")]
pub async fn ready_handler(db: web::Data<Arc<DatabaseConnection>>) -> HttpResponse {
    let probe = db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await;

    match probe {
        Ok(_) => ApiResponse::success(HealthStatus {
            status: "ok",
            database: Some("ok"),
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness probe failed");
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "success": false,
                "data": HealthStatus {
                    status: "unhealthy",
                    database: Some("unhealthy"),
                },
            }))
        }
    }
}
