// Single-resolution async wrappers around `Blob::start_read`
use super::error::{ReadError, ReadResult};
use super::types::{ReadSink, SharedBlob};
use crate::codec::{encode, format_data_url};

/// Read the whole blob into memory.
///
/// Starts exactly one underlying read and waits for it. There is no retry
/// and no timeout: a blob that never resolves keeps this future pending.
pub async fn read_as_bytes(handle: &SharedBlob) -> ReadResult<Vec<u8>> {
    let (sink, rx) = ReadSink::channel();
    log::debug!("📖 Reading '{}' ({} bytes)", handle.name(), handle.size());
    handle.clone().start_read(sink);
    match rx.await {
        Ok(result) => result,
        // Sink dropped without an answer
        Err(_) => Err(ReadError::Aborted),
    }
}

/// Read the blob as `data:<mime>;base64,<payload>`, using the blob's own mime type.
pub async fn read_as_data_url(handle: &SharedBlob) -> ReadResult<String> {
    let bytes = read_as_bytes(handle).await?;
    Ok(format_data_url(handle.mime_type(), &encode(&bytes)))
}
