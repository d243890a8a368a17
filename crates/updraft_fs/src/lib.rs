//! # Updraft FileSystem Store
//!
//! A local directory backend for updraft.
//!
//! This crate implements the [`UpdateStore`] trait over the layout the
//! publish tooling writes:
//!
//! ```text
//! updates/{runtimeVersion}/metadata.json
//! updates/{runtimeVersion}/assets/{filename}
//! updates/{runtimeVersion}/bundle/...
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! use updraft_fs::FileSystemStore;
//!
//! let store = FileSystemStore::new("./data");
//! ```

use updraft_core::prelude::*;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tokio::fs;

#[derive(Clone)]
pub struct FileSystemStore {
    root: PathBuf,
}

impl FileSystemStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { root: path.into() }
    }

    fn get_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl UpdateStore for FileSystemStore {
    async fn runtime_version_exists(&self, runtime_version: &str) -> bool {
        self.get_path(&self.runtime_version_path(runtime_version))
            .is_dir()
    }

    async fn read_metadata(&self, runtime_version: &str) -> Result<Metadata, StoreError> {
        let path = self.get_path(&self.metadata_path(runtime_version));
        let contents = fs::read(&path).await.map_err(|_| StoreError::Metadata)?;
        serde_json::from_slice(&contents).map_err(|_| StoreError::Metadata)
    }

    async fn created_at(&self, runtime_version: &str) -> Result<DateTime<Utc>, StoreError> {
        let path = self.get_path(&self.metadata_path(runtime_version));
        let metadata = fs::metadata(&path).await.map_err(|_| StoreError::Metadata)?;

        // Not every filesystem reports a birth time; fall back to mtime.
        let created = metadata
            .created()
            .or_else(|_| metadata.modified())
            .map_err(|_| StoreError::Metadata)?;

        Ok(created.into())
    }

    async fn read_asset(&self, path: &str) -> Result<Bytes, StoreError> {
        let path = self.get_path(path);
        match fs::read(&path).await {
            Ok(data) => Ok(Bytes::from(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(path.to_string_lossy().to_string()))
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}
