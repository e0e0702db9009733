use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::RwLock;
use tracing::{error, warn};

use crate::domain::common::entities::app_errors::CoreError;

/// A whole collection kept in memory and mirrored to one JSON file.
///
/// Reads never touch the disk after `open`. Every write replaces the file
/// before the in-memory copy, so a failed write leaves both untouched.
#[derive(Debug)]
pub struct JsonCollectionStore<T> {
    path: Option<PathBuf>,
    items: RwLock<Vec<T>>,
}

impl<T> JsonCollectionStore<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    pub fn in_memory() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            path: None,
            items: RwLock::new(items),
        }
    }

    /// Loads the collection from `path`. A missing file is an empty
    /// collection, and so is an unreadable one after logging it.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = load(&path).await;

        Self {
            path: Some(path),
            items: RwLock::new(items),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub async fn read_all(&self) -> Vec<T> {
        self.items.read().await.clone()
    }

    pub async fn write_all(&self, items: Vec<T>) -> Result<(), CoreError> {
        let mut guard = self.items.write().await;

        if let Some(path) = &self.path {
            persist(path, &items).await?;
        }

        *guard = items;
        Ok(())
    }
}

async fn load<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let raw = match tokio::fs::read(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            error!(path = %path.display(), "Failed to read collection: {}", e);
            return Vec::new();
        }
    };

    serde_json::from_slice(&raw).unwrap_or_else(|e| {
        warn!(path = %path.display(), "Ignoring corrupt collection: {}", e);
        Vec::new()
    })
}

async fn persist<T: Serialize>(path: &Path, items: &[T]) -> Result<(), CoreError> {
    let json = serde_json::to_vec_pretty(items).map_err(|e| {
        error!("Failed to serialize collection: {}", e);
        CoreError::StorageError(format!("Failed to serialize collection: {}", e))
    })?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            error!(path = %parent.display(), "Failed to create data directory: {}", e);
            CoreError::StorageError(format!("Failed to create data directory: {}", e))
        })?;
    }

    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, json).await.map_err(|e| {
        error!(path = %tmp.display(), "Failed to write collection: {}", e);
        CoreError::StorageError(format!("Failed to write collection: {}", e))
    })?;
    tokio::fs::rename(&tmp, path).await.map_err(|e| {
        error!(path = %path.display(), "Failed to replace collection: {}", e);
        CoreError::StorageError(format!("Failed to replace collection: {}", e))
    })
}
