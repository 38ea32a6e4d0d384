use eyre::{Context, Result};
use itertools::Itertools;
use tracing::debug;

use crate::model::{util::datetime_to_store_repr, Album, AlbumId, LocationLabel, Photo};

use super::{
    kv::KvStore,
    stored::{StoredAlbum, StoredPhoto},
};

/// Key under which the flat album list is stored.
pub const ALBUMS_KEY: &str = "albums";

#[derive(Debug, Clone, PartialEq)]
pub struct CreateAlbum {
    pub name: String,
    pub photos: Vec<Photo>,
    pub location: LocationLabel,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAlbum {
    #[error("album name must not be empty")]
    EmptyName,
    #[error("album must contain at least one photo")]
    NoPhotos,
}

impl CreateAlbum {
    /// Boundary check before anything touches the store. The trimmed
    /// name is what gets persisted.
    pub fn validate(mut self) -> Result<CreateAlbum, InvalidAlbum> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(InvalidAlbum::EmptyName);
        }
        if self.photos.is_empty() {
            return Err(InvalidAlbum::NoPhotos);
        }
        self.name = name.to_owned();
        Ok(self)
    }
}

/// Append a finished album to the stored list, assigning the next id.
/// Existing entries are never edited. No partial album is persisted:
/// validation failures leave the store untouched.
pub async fn create_album(store: &impl KvStore, create_album: CreateAlbum) -> Result<AlbumId> {
    let create_album = create_album.validate()?;
    let mut stored = load_stored(store).await?;
    let id = AlbumId(stored.len() as i64 + 1);
    let album = StoredAlbum {
        id,
        name: create_album.name,
        photos: create_album.photos.iter().map(StoredPhoto::from).collect(),
        location: create_album.location,
        created_at: datetime_to_store_repr(&chrono::Utc::now()),
    };
    debug!(album = %id, photos = album.photos.len(), "appending album");
    stored.push(album);
    let json = serde_json::to_string(&stored).wrap_err("could not serialize album list")?;
    store.set(ALBUMS_KEY, &json).await?;
    Ok(id)
}

/// All stored albums, newest first.
pub async fn get_all_albums(store: &impl KvStore) -> Result<Vec<Album>> {
    let stored = load_stored(store).await?;
    let mut albums: Vec<Album> = stored.iter().map(Album::try_from).try_collect()?;
    albums.sort_by_key(|album| std::cmp::Reverse((album.created_at, album.id)));
    Ok(albums)
}

pub async fn get_album(store: &impl KvStore, album_id: AlbumId) -> Result<Option<Album>> {
    let stored = load_stored(store).await?;
    stored
        .iter()
        .find(|album| album.id == album_id)
        .map(Album::try_from)
        .transpose()
}

async fn load_stored(store: &impl KvStore) -> Result<Vec<StoredAlbum>> {
    match store.get(ALBUMS_KEY).await? {
        None => Ok(Vec::new()),
        Some(json) => serde_json::from_str(&json).wrap_err("could not parse stored album list"),
    }
}
