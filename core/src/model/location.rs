use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Place tag attached to an album at creation time.
///
/// Resolution is best-effort: a failed or absent reverse-geocoding lookup
/// leaves the raw coordinates standing, a denied location capability leaves
/// `Unavailable`. Never blocks album creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LocationLabel {
    /// Resolved place name.
    Place(String),
    /// Raw coordinates, shown when no place name could be resolved.
    Coordinates { lat: f64, lon: f64 },
    /// Location capability denied or not supported.
    Unavailable,
}

impl Display for LocationLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationLabel::Place(name) => f.write_str(name),
            LocationLabel::Coordinates { lat, lon } => {
                f.write_fmt(format_args!("{lat:.4}, {lon:.4}"))
            }
            LocationLabel::Unavailable => f.write_str("location unavailable"),
        }
    }
}
