//! Best-effort reverse geocoding for album location labels.
//!
//! Lookups go straight to a hosted Nominatim instance. Callers treat
//! every failure as non-fatal and fall back to raw coordinates.

mod nominatim;

pub use nominatim::*;

use serde::{Deserialize, Serialize};

/// WGS84 position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("reverse geocoding request failed")]
    Http(#[from] reqwest::Error),
    #[error("could not parse reverse geocoding response")]
    BadResponse(#[from] serde_json::Error),
}
