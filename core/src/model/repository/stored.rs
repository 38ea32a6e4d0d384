use serde::{Deserialize, Serialize};

use crate::model::{
    util::{datetime_from_store_repr, datetime_to_store_repr},
    Album, AlbumId, LocationLabel, Photo, PhotoId, Size,
};

/// Album as serialized into the key-value store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAlbum {
    pub id: AlbumId,
    pub name: String,
    pub photos: Vec<StoredPhoto>,
    pub location: LocationLabel,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPhoto {
    pub id: PhotoId,
    pub data: Vec<u8>,
    pub size: Size,
}

impl From<&Album> for StoredAlbum {
    fn from(value: &Album) -> Self {
        StoredAlbum {
            id: value.id,
            name: value.name.clone(),
            photos: value.photos.iter().map(StoredPhoto::from).collect(),
            location: value.location.clone(),
            created_at: datetime_to_store_repr(&value.created_at),
        }
    }
}

impl From<&Photo> for StoredPhoto {
    fn from(value: &Photo) -> Self {
        StoredPhoto {
            id: value.id,
            data: value.data.clone(),
            size: value.size,
        }
    }
}

impl TryFrom<&StoredAlbum> for Album {
    type Error = eyre::Report;

    fn try_from(value: &StoredAlbum) -> Result<Self, Self::Error> {
        let created_at = datetime_from_store_repr(value.created_at)?;
        Ok(Album {
            id: value.id,
            name: value.name.clone(),
            photos: value.photos.iter().map(Photo::from).collect(),
            location: value.location.clone(),
            created_at,
        })
    }
}

impl TryFrom<StoredAlbum> for Album {
    type Error = eyre::Report;

    fn try_from(value: StoredAlbum) -> Result<Self, Self::Error> {
        (&value).try_into()
    }
}

impl From<&StoredPhoto> for Photo {
    fn from(value: &StoredPhoto) -> Self {
        Photo {
            id: value.id,
            data: value.data.clone(),
            size: value.size,
        }
    }
}
