use serde::Deserialize;

/// Client platform an update bundle targets.
///
/// Parsing is strict: exactly `"ios"` or `"android"`, case-sensitive, no
/// aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "android" => Some(Self::Android),
            "ios" => Some(Self::Ios),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::Ios => "ios",
        }
    }
}

/// The `metadata.json` document the publish tooling drops into each
/// runtime-version directory. Field names on disk are camelCase; every field
/// except `version` may be absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub version: u32,
    pub bundler: Option<String>,
    pub file_metadata: Option<FileMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub android: Option<PlatformBundle>,
    pub ios: Option<PlatformBundle>,
}

/// One platform's slice of the bundle: the main bundle file plus its assets,
/// in the order the bundler emitted them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformBundle {
    pub bundle: Option<String>,
    pub assets: Option<Vec<AssetDescriptor>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDescriptor {
    /// Path relative to the runtime-version directory, e.g. "assets/abc".
    pub path: String,
    pub ext: String,
}

impl AssetDescriptor {
    /// The logical filename: everything after the last `/` of `path`.
    pub fn filename(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

impl Metadata {
    pub fn bundle_for(&self, platform: Platform) -> Option<&PlatformBundle> {
        let file_metadata = self.file_metadata.as_ref()?;
        match platform {
            Platform::Android => file_metadata.android.as_ref(),
            Platform::Ios => file_metadata.ios.as_ref(),
        }
    }

    /// The asset list for `platform`. An absent `fileMetadata`, platform
    /// entry or asset list all read as an empty list.
    pub fn assets_for(&self, platform: Platform) -> &[AssetDescriptor] {
        self.bundle_for(platform)
            .and_then(|bundle| bundle.assets.as_deref())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METADATA_JSON: &str = r#"{
        "version": 0,
        "bundler": "metro",
        "fileMetadata": {
            "ios": {
                "bundle": "bundles/ios-abc123.js",
                "assets": [
                    { "path": "assets/abc", "ext": "png" },
                    { "path": "assets/def", "ext": "ttf" }
                ]
            },
            "android": {
                "bundle": "bundles/android-def456.js",
                "assets": [
                    { "path": "assets/xyz", "ext": "jpg" }
                ]
            }
        }
    }"#;

    #[test]
    fn parses_camel_case_document() {
        let metadata: Metadata = serde_json::from_str(METADATA_JSON).unwrap();

        assert_eq!(metadata.version, 0);
        assert_eq!(metadata.bundler.as_deref(), Some("metro"));

        let ios = metadata.assets_for(Platform::Ios);
        assert_eq!(ios.len(), 2);
        assert_eq!(ios[0].path, "assets/abc");
        assert_eq!(ios[0].ext, "png");
        assert_eq!(ios[1].path, "assets/def");

        let android = metadata.assets_for(Platform::Android);
        assert_eq!(android.len(), 1);
        assert_eq!(android[0].path, "assets/xyz");
    }

    #[test]
    fn property_names_are_case_sensitive() {
        // "FileMetadata" is not the canonical casing, so it reads as an
        // unknown field and the platform lists come back empty.
        let metadata: Metadata =
            serde_json::from_str(r#"{ "version": 1, "FileMetadata": {} }"#).unwrap();

        assert!(metadata.file_metadata.is_none());
        assert!(metadata.assets_for(Platform::Ios).is_empty());
    }

    #[test]
    fn absent_platform_lists_read_as_empty() {
        let metadata: Metadata =
            serde_json::from_str(r#"{ "version": 1, "bundler": "metro", "fileMetadata": null }"#)
                .unwrap();
        assert!(metadata.assets_for(Platform::Ios).is_empty());
        assert!(metadata.assets_for(Platform::Android).is_empty());

        let metadata: Metadata = serde_json::from_str(
            r#"{ "version": 1, "fileMetadata": { "ios": { "bundle": "b.js" } } }"#,
        )
        .unwrap();
        assert!(metadata.assets_for(Platform::Ios).is_empty());
    }

    #[test]
    fn filename_is_last_path_segment() {
        let asset = AssetDescriptor {
            path: "assets/nested/dir/abc".to_string(),
            ext: "png".to_string(),
        };
        assert_eq!(asset.filename(), "abc");

        let flat = AssetDescriptor {
            path: "abc".to_string(),
            ext: "png".to_string(),
        };
        assert_eq!(flat.filename(), "abc");
    }

    #[test]
    fn platform_parsing_is_strict() {
        assert_eq!(Platform::parse("ios"), Some(Platform::Ios));
        assert_eq!(Platform::parse("android"), Some(Platform::Android));
        assert_eq!(Platform::parse("IOS"), None);
        assert_eq!(Platform::parse("Android"), None);
        assert_eq!(Platform::parse("web"), None);
        assert_eq!(Platform::parse(""), None);
    }
}
