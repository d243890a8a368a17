use crate::metadata::{AssetDescriptor, Metadata, Platform};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The manifest served to clients: when the bundle was created and which
/// assets the requested platform needs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub created_at: DateTime<Utc>,
    pub runtime_version: String,
    pub assets: Vec<ManifestAsset>,
}

impl Manifest {
    pub fn new(
        created_at: DateTime<Utc>,
        runtime_version: impl Into<String>,
        assets: Vec<ManifestAsset>,
    ) -> Self {
        Self {
            created_at,
            runtime_version: runtime_version.into(),
            assets,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestAsset {
    /// No source for this in the supported document schema; always null.
    pub hash: Option<String>,
    pub key: String,
    pub file_extension: String,
    /// No source for this in the supported document schema; always null.
    pub content_type: Option<String>,
    pub url: String,
}

impl ManifestAsset {
    pub fn from_descriptor(asset: &AssetDescriptor, runtime_version: &str, base_url: &str) -> Self {
        Self {
            hash: None,
            key: asset.filename().to_string(),
            file_extension: format!(".{}", asset.ext),
            content_type: None,
            url: format!(
                "{base_url}/assets?asset=updates/{runtime_version}/{}",
                asset.path
            ),
        }
    }
}

/// Projects the metadata's asset list for `platform` into served assets,
/// preserving the stored order.
pub fn project_assets(
    metadata: &Metadata,
    platform: Platform,
    runtime_version: &str,
    base_url: &str,
) -> Vec<ManifestAsset> {
    metadata
        .assets_for(platform)
        .iter()
        .map(|asset| ManifestAsset::from_descriptor(asset, runtime_version, base_url))
        .collect()
}
