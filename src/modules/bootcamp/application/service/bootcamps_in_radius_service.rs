use async_trait::async_trait;
use tracing::debug;

use crate::bootcamp::application::domain::entities::{radius_in_radians, Bootcamp};
use crate::bootcamp::application::ports::incoming::use_cases::BootcampsInRadiusUseCase;
use crate::bootcamp::application::ports::outgoing::BootcampRepository;
use crate::geocoding::application::ports::outgoing::Geocoder;
use crate::shared::api::{ApiError, AppError};

pub const INVALID_DISTANCE: &str = "Please provide a valid distance";

pub struct BootcampsInRadiusService<R, G>
where
    R: BootcampRepository,
    G: Geocoder,
{
    bootcamps: R,
    geocoder: G,
}

impl<R, G> BootcampsInRadiusService<R, G>
where
    R: BootcampRepository,
    G: Geocoder,
{
    pub fn new(bootcamps: R, geocoder: G) -> Self {
        Self {
            bootcamps,
            geocoder,
        }
    }
}

#[async_trait]
impl<R, G> BootcampsInRadiusUseCase for BootcampsInRadiusService<R, G>
where
    R: BootcampRepository + Send + Sync,
    G: Geocoder + Send + Sync,
{
    async fn execute(&self, zipcode: &str, distance: f64) -> Result<Vec<Bootcamp>, AppError> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(ApiError::bad_request(INVALID_DISTANCE).into());
        }

        let centre = self.geocoder.geocode(zipcode).await?;
        let radius = radius_in_radians(distance);
        debug!(zipcode, lat = centre.latitude, lng = centre.longitude, radius, "Radius search");

        Ok(self
            .bootcamps
            .within_radius(centre.latitude, centre.longitude, radius)
            .await?)
    }
}
