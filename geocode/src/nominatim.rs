use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::{Coordinates, GeocodeError};

const NOMINATIM_BASE: &str = "https://nominatim.openstreetmap.org";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Nominatim `/reverse` endpoint.
pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    pub fn new() -> Result<NominatimClient, GeocodeError> {
        NominatimClient::with_base_url(NOMINATIM_BASE.to_owned())
    }

    /// Point lookups at a different host, for tests or a self-hosted
    /// instance.
    pub fn with_base_url(base_url: String) -> Result<NominatimClient, GeocodeError> {
        // the hosted instance rejects requests without a user agent
        let http = reqwest::Client::builder()
            .user_agent(concat!("geocode/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(NominatimClient { http, base_url })
    }

    /// Reverse geocode to a short human-readable place name, `None`
    /// when the response carries no usable address parts.
    pub async fn reverse(&self, position: Coordinates) -> Result<Option<String>, GeocodeError> {
        let url = format!(
            "{}/reverse?format=json&lat={}&lon={}",
            self.base_url, position.lat, position.lon
        );
        let body = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let response: ReverseResponse = serde_json::from_str(&body)?;
        let place = response.address.and_then(|address| address.place_label());
        debug!(lat = position.lat, lon = position.lon, ?place, "reverse geocoded");
        Ok(place)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReverseResponse {
    pub address: Option<Address>,
}

/// Address parts of a Nominatim response that matter for labeling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Address {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub county: Option<String>,
    pub country: Option<String>,
}

impl Address {
    /// Smallest settlement first, then county, then country.
    pub fn place_label(&self) -> Option<String> {
        self.city
            .clone()
            .or_else(|| self.town.clone())
            .or_else(|| self.village.clone())
            .or_else(|| self.county.clone())
            .or_else(|| self.country.clone())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn settlement_beats_county_and_country() {
        let address = Address {
            city: Some("Freiburg".to_owned()),
            county: Some("Breisgau-Hochschwarzwald".to_owned()),
            country: Some("Deutschland".to_owned()),
            ..Address::default()
        };
        assert_eq!(address.place_label().as_deref(), Some("Freiburg"));

        let address = Address {
            village: Some("Hinterzarten".to_owned()),
            country: Some("Deutschland".to_owned()),
            ..Address::default()
        };
        assert_eq!(address.place_label().as_deref(), Some("Hinterzarten"));
    }

    #[test]
    fn county_then_country_as_fallbacks() {
        let address = Address {
            county: Some("Breisgau-Hochschwarzwald".to_owned()),
            country: Some("Deutschland".to_owned()),
            ..Address::default()
        };
        assert_eq!(
            address.place_label().as_deref(),
            Some("Breisgau-Hochschwarzwald")
        );

        let address = Address {
            country: Some("Deutschland".to_owned()),
            ..Address::default()
        };
        assert_eq!(address.place_label().as_deref(), Some("Deutschland"));
    }

    #[test]
    fn response_without_usable_parts_yields_no_label() {
        let response: ReverseResponse =
            serde_json::from_str(r#"{"address": {"postcode": "79117"}}"#).unwrap();
        assert_eq!(
            response.address.and_then(|address| address.place_label()),
            None
        );

        let response: ReverseResponse = serde_json::from_str(r#"{"error": "Unable to geocode"}"#)
            .unwrap();
        assert_eq!(response.address, None);
    }

    #[test]
    fn full_response_parses() {
        let body = r#"{
            "place_id": 127289,
            "address": {
                "road": "Kaiser-Joseph-Straße",
                "city": "Freiburg im Breisgau",
                "county": "Breisgau-Hochschwarzwald",
                "state": "Baden-Württemberg",
                "country": "Deutschland",
                "country_code": "de"
            }
        }"#;
        let response: ReverseResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.address.and_then(|address| address.place_label()),
            Some("Freiburg im Breisgau".to_owned())
        );
    }
}
