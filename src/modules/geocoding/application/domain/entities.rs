use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A resolved postal address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeoLocation {
    #[schema(example = 42.350_9)]
    pub latitude: f64,
    #[schema(example = -71.105_4)]
    pub longitude: f64,
    #[schema(example = "233 Bay State Rd, Boston, MA 02215, US")]
    pub formatted_address: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
}

impl GeoLocation {
    /// `street, city, state zipcode, country`, skipping empty parts.
    pub fn format_address(
        street: &str,
        city: &str,
        state: &str,
        zipcode: &str,
        country: &str,
    ) -> String {
        let state_zip = [state, zipcode]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");

        [street, city, state_zip.as_str(), country]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address_skips_blanks() {
        assert_eq!(
            GeoLocation::format_address("233 Bay State Rd", "Boston", "MA", "02215", "US"),
            "233 Bay State Rd, Boston, MA 02215, US"
        );
        assert_eq!(
            GeoLocation::format_address("", "Boston", "", "02215", "US"),
            "Boston, 02215, US"
        );
    }
}
