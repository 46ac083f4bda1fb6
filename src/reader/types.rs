// Core reader types and traits
use super::error::{ReadError, ReadResult};
use std::sync::Arc;
use tokio::sync::oneshot;

/// Mime type reported when a blob does not know its own.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Shared, type-erased handle to a blob.
pub type SharedBlob = Arc<dyn Blob>;

/// Binary file-like data provided by the platform (a dropped file, an
/// in-memory buffer, ...).
///
/// `start_read` is the raw callback-style primitive: an implementation
/// kicks off its read and later resolves `sink` exactly once. Callers should
/// go through [`read_as_bytes`](super::read_as_bytes) instead of calling it
/// directly.
pub trait Blob: Send + Sync + 'static {
    fn name(&self) -> &str;
    fn size(&self) -> u64;

    fn mime_type(&self) -> &str {
        DEFAULT_MIME_TYPE
    }

    fn start_read(self: Arc<Self>, sink: ReadSink);
}

/// Completion callback for one read. Every method consumes the sink, so a
/// read can resolve at most once. Dropping it unresolved counts as an abort.
#[derive(Debug)]
pub struct ReadSink {
    tx: oneshot::Sender<ReadResult<Vec<u8>>>,
}

impl ReadSink {
    pub(crate) fn channel() -> (Self, oneshot::Receiver<ReadResult<Vec<u8>>>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    /// Report the full contents of the blob.
    pub fn load(self, bytes: Vec<u8>) {
        self.resolve(Ok(bytes));
    }

    /// Report that the read was aborted.
    pub fn abort(self) {
        self.resolve(Err(ReadError::Aborted));
    }

    /// Report that the read failed.
    pub fn fail(self, reason: impl Into<String>) {
        self.resolve(Err(ReadError::Failed {
            reason: reason.into(),
        }));
    }

    fn resolve(self, result: ReadResult<Vec<u8>>) {
        // Receiver gone means the caller stopped waiting; nothing to do
        let _ = self.tx.send(result);
    }
}
