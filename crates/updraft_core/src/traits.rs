use crate::error::StoreError;
use crate::metadata::Metadata;

use bytes::Bytes;
use chrono::{DateTime, Utc};

/// Read-only view of the update bundle tree. Nothing in this system writes;
/// the publish tooling owns the layout.
pub trait UpdateStore: Send + Sync + 'static + Clone {
    /// Whether a directory for `runtime_version` exists at all. Kept separate
    /// from [`read_metadata`](Self::read_metadata) so an unknown version maps
    /// to not-found rather than a read failure.
    fn runtime_version_exists(
        &self,
        runtime_version: &str,
    ) -> impl Future<Output = bool> + Send;

    /// Reads and parses the version's metadata document. Every failure mode
    /// (missing file, I/O, malformed JSON) is reported as
    /// [`StoreError::Metadata`].
    fn read_metadata(
        &self,
        runtime_version: &str,
    ) -> impl Future<Output = Result<Metadata, StoreError>> + Send;

    /// Creation timestamp of the metadata document, served verbatim as the
    /// manifest's `createdAt`.
    fn created_at(
        &self,
        runtime_version: &str,
    ) -> impl Future<Output = Result<DateTime<Utc>, StoreError>> + Send;

    /// Raw bytes of a stored file, addressed relative to the store root.
    fn read_asset(&self, path: &str) -> impl Future<Output = Result<Bytes, StoreError>> + Send;

    fn metadata_path(&self, runtime_version: &str) -> String {
        format!("updates/{runtime_version}/metadata.json")
    }

    fn runtime_version_path(&self, runtime_version: &str) -> String {
        format!("updates/{runtime_version}")
    }
}
