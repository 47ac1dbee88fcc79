//! Error type for catalog loading, colour parsing and export

use std::path::PathBuf;

/// Errors produced outside of rendering (rendering itself cannot fail)
#[derive(Debug, thiserror::Error)]
pub enum FishTextureError {
    #[error("Invalid colour {input:?}: {reason}")]
    InvalidColor { input: String, reason: &'static str },

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported catalog format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Texture file name {file_name} for {name:?} is already taken")]
    FileNameCollision { name: String, file_name: String },

    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),
}
