//! MapQuest address geocoding over reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::geocoding::application::domain::entities::GeoLocation;
use crate::geocoding::application::ports::outgoing::{GeocodeError, Geocoder};

pub const DEFAULT_BASE_URL: &str = "https://www.mapquestapi.com/geocoding/v1/address";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct MapQuestConfig {
    pub api_key: String,
    pub base_url: String,
}

#[derive(Clone)]
pub struct MapQuestGeocoder {
    client: Client,
    api_key: String,
    base_url: String,
}

impl MapQuestGeocoder {
    pub fn new(config: MapQuestConfig) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GeocodeError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            api_key: config.api_key,
            base_url: config.base_url,
        })
    }

    fn request_url(&self, address: &str) -> Result<Url, GeocodeError> {
        Url::parse_with_params(
            &self.base_url,
            &[
                ("key", self.api_key.as_str()),
                ("location", address),
                ("maxResults", "1"),
            ],
        )
        .map_err(|e| GeocodeError::Transport(format!("invalid geocoder URL: {}", e)))
    }
}

#[async_trait]
impl Geocoder for MapQuestGeocoder {
    async fn geocode(&self, address: &str) -> Result<GeoLocation, GeocodeError> {
        let url = self.request_url(address)?;

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| GeocodeError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| GeocodeError::Transport(e.to_string()))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Geocoder rejected request");
            return Err(GeocodeError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let location = parse_location(&body, address)?;
        debug!(address, lat = location.latitude, lng = location.longitude, "Geocoded");
        Ok(location)
    }
}

#[derive(Debug, Deserialize)]
struct MapQuestResponse {
    #[serde(default)]
    results: Vec<MapQuestResult>,
}

#[derive(Debug, Deserialize)]
struct MapQuestResult {
    #[serde(default)]
    locations: Vec<MapQuestLocation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MapQuestLocation {
    #[serde(default)]
    street: String,
    /// City.
    #[serde(default)]
    admin_area5: String,
    /// State.
    #[serde(default)]
    admin_area3: String,
    /// Country code.
    #[serde(default)]
    admin_area1: String,
    #[serde(default)]
    postal_code: String,
    lat_lng: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

fn parse_location(body: &[u8], address: &str) -> Result<GeoLocation, GeocodeError> {
    let decoded: MapQuestResponse =
        serde_json::from_slice(body).map_err(|e| GeocodeError::Decode(e.to_string()))?;

    let loc = decoded
        .results
        .into_iter()
        .flat_map(|r| r.locations)
        .next()
        .ok_or_else(|| GeocodeError::NoMatch(address.to_string()))?;

    Ok(GeoLocation {
        latitude: loc.lat_lng.lat,
        longitude: loc.lat_lng.lng,
        formatted_address: GeoLocation::format_address(
            &loc.street,
            &loc.admin_area5,
            &loc.admin_area3,
            &loc.postal_code,
            &loc.admin_area1,
        ),
        street: loc.street,
        city: loc.admin_area5,
        state: loc.admin_area3,
        zipcode: loc.postal_code,
        country: loc.admin_area1,
    })
}
