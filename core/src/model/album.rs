use chrono::{DateTime, Utc};

use super::{AlbumId, LocationLabel, Photo};

/// A named group of kept photos, created once per decision pass.
/// Immutable after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    pub id: AlbumId,
    pub name: String,
    pub photos: Vec<Photo>,
    pub location: LocationLabel,
    pub created_at: DateTime<Utc>,
}

impl Album {
    /// First photo, used as the album card thumbnail.
    pub fn cover_photo(&self) -> &Photo {
        &self.photos[0]
    }
}
