use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Missing file, I/O failure and malformed JSON all surface as this one
    /// message.
    #[error("Failed to parse metadata.json")]
    Metadata,

    #[error("No updates for runtimeVersion '{0}' available.")]
    UnknownRuntimeVersion(String),

    #[error("Path not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unsupported platform. Expected either ios or android.")]
    UnsupportedPlatform,

    #[error("No runtimeVersion provided.")]
    NoRuntimeVersion,

    #[error("Invalid asset path.")]
    InvalidAssetPath,
}
