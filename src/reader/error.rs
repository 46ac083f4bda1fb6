use thiserror::Error;

/// A specialized `Result` type for blob reads.
pub type ReadResult<T> = Result<T, ReadError>;

/// The error type for a failed blob read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error("file reading was aborted")]
    Aborted,

    #[error("file reading has failed: {reason}")]
    Failed { reason: String },
}
