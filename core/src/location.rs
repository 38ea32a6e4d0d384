use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use geocode::{Coordinates, GeocodeError, NominatimClient};

use crate::capability::Capability;
use crate::model::LocationLabel;

/// Upper bound on the reverse-geocoding attempt. Past this the
/// coordinate label stands.
pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Source of a device position fix, supplied by the platform adapter.
#[async_trait]
pub trait PositionSource {
    /// Best-effort current position, `None` when no fix is available.
    async fn current_position(&self) -> Option<Coordinates>;
}

#[async_trait]
pub trait ReverseGeocoder {
    async fn place_label(&self, position: Coordinates) -> Result<Option<String>, GeocodeError>;
}

#[async_trait]
impl ReverseGeocoder for NominatimClient {
    async fn place_label(&self, position: Coordinates) -> Result<Option<String>, GeocodeError> {
        self.reverse(position).await
    }
}

/// Resolve the label attached to the next album. Never fails and never
/// blocks album creation beyond [`LOOKUP_TIMEOUT`]: a denied capability
/// or missing fix degrades to `Unavailable`, a failed or slow lookup to
/// the raw coordinates.
pub async fn resolve_location_label(
    capability: Capability,
    positions: &impl PositionSource,
    geocoder: &impl ReverseGeocoder,
) -> LocationLabel {
    if !capability.is_usable() {
        return LocationLabel::Unavailable;
    }
    let Some(position) = positions.current_position().await else {
        return LocationLabel::Unavailable;
    };
    let coordinates = LocationLabel::Coordinates {
        lat: position.lat,
        lon: position.lon,
    };
    match tokio::time::timeout(LOOKUP_TIMEOUT, geocoder.place_label(position)).await {
        Ok(Ok(Some(place))) => LocationLabel::Place(place),
        Ok(Ok(None)) => coordinates,
        Ok(Err(err)) => {
            warn!(%err, "reverse geocoding failed, keeping coordinates");
            coordinates
        }
        Err(_) => {
            warn!("reverse geocoding timed out, keeping coordinates");
            coordinates
        }
    }
}
