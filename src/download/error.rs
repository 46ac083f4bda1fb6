use crate::codec::DecodeError;
use std::path::PathBuf;
use thiserror::Error;

/// A specialized `Result` type for materializing downloads.
pub type DownloadResult<T> = Result<T, DownloadError>;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Artifact content is not valid base64: {source}")]
    Decode {
        #[from]
        source: DecodeError,
    },

    #[error("Failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No free file name left for '{filename}'")]
    NoFreeName { filename: String },
}
