mod geocoder;

#[cfg(test)]
pub use geocoder::MockGeocoder;
pub use geocoder::{GeocodeError, Geocoder};
