use super::types::{Blob, DEFAULT_MIME_TYPE, ReadSink};
use std::sync::Arc;

/// Blob backed by an in-memory buffer. Reads resolve immediately.
#[derive(Debug, Clone)]
pub struct MemoryBlob {
    name: String,
    mime_type: String,
    bytes: Arc<[u8]>,
}

impl MemoryBlob {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let bytes: Vec<u8> = bytes.into();
        Self {
            name: name.into(),
            mime_type: DEFAULT_MIME_TYPE.to_string(),
            bytes: bytes.into(),
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }
}

impl Blob for MemoryBlob {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    fn start_read(self: Arc<Self>, sink: ReadSink) {
        sink.load(self.bytes.to_vec());
    }
}
