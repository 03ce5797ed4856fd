use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot decode {} as {encoding}", path.display())]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    #[error("Text cannot be encoded as {encoding}")]
    Encode { encoding: &'static str },

    #[error("No path provided for save")]
    NoTargetPath,

    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),
}

impl AppError {
    /// True when the failure can be recovered by retrying with another encoding.
    pub fn is_decode(&self) -> bool {
        matches!(self, AppError::Decode { .. })
    }
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
