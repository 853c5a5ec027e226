mod mapquest_geocoder;

pub use mapquest_geocoder::{MapQuestConfig, MapQuestGeocoder, DEFAULT_BASE_URL};
