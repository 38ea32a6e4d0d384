use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use camino::Utf8PathBuf as PathBuf;
use eyre::{Context, Result};

/// Abstraction over the small key-value store backing persistence.
/// String keys map to whole string values, read and written atomically
/// from the caller's point of view. Every `key` has to also be a valid
/// file name, so that the `LocalFileStore` implementation can use the
/// key as a path without any fuss.
#[async_trait]
pub trait KvStore {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Store keeping one file per key under a root directory.
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: PathBuf) -> LocalFileStore {
        LocalFileStore { root }
    }
}

#[async_trait]
impl KvStore for LocalFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match tokio::fs::read_to_string(self.root.join(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).wrap_err("error reading store file"),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .wrap_err("could not create store directory")?;
        tokio::fs::write(self.root.join(key), value)
            .await
            .wrap_err("error writing store file")
    }

    async fn remove(&self, key: &str) -> Result<()> {
        match tokio::fs::remove_file(self.root.join(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).wrap_err("error removing store file"),
        }
    }
}

/// In-memory store for tests and platforms that bring their own
/// persistence surface.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}
