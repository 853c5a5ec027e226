// src/shared/api/json_config.rs
use actix_web::web::{JsonConfig, PathConfig, QueryConfig};

use crate::shared::api::{ApiError, AppError};
use crate::shared::storage::StorageFault;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        AppError::from(ApiError::bad_request(format!("Invalid request body: {}", err))).into()
    })
}

/// Path segments are resource identifiers; one that does not parse can
/// never address a record.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, req| {
        let raw = req.match_info().as_str().to_string();
        tracing::debug!("Rejected path {}: {}", raw, err);
        AppError::from(StorageFault::MalformedId(raw)).into()
    })
}

pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        AppError::from(ApiError::bad_request(format!("Invalid query string: {}", err))).into()
    })
}
