use async_trait::async_trait;

use crate::geocoding::application::domain::entities::GeoLocation;
use crate::shared::api::AppError;

#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("Geocoder request failed: {0}")]
    Transport(String),

    #[error("Geocoder answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Geocoder response could not be decoded: {0}")]
    Decode(String),

    #[error("No location found for '{0}'")]
    NoMatch(String),
}

/// Resolves free-form addresses and postal codes to coordinates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<GeoLocation, GeocodeError>;
}

/// Geocoding is an external dependency the client cannot fix.
impl From<GeocodeError> for AppError {
    fn from(err: GeocodeError) -> Self {
        AppError::Unrecovered(err.into())
    }
}
