use crate::reader::SharedBlob;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one record, unique for the lifetime of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Record lifecycle: `Added -> Reading -> Ready | Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadState {
    Added,
    Reading,
    Ready,
    Failed,
}

impl UploadState {
    /// True while the record still waits for its read.
    pub fn is_pending(self) -> bool {
        matches!(self, UploadState::Added | UploadState::Reading)
    }
}

/// How the store obtains base64 content for a blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadMode {
    /// Read raw bytes, then encode them.
    #[default]
    Bytes,
    /// Read a data URL and keep its base64 payload.
    DataUrl,
}

/// One tracked upload, owned by the store.
#[derive(Clone)]
pub struct PendingUpload {
    pub id: RecordId,
    pub source: SharedBlob,
    pub filename: String,
    pub size_bytes: u64,
    pub state: UploadState,
    pub encoded_content: Option<String>,
}

impl fmt::Debug for PendingUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingUpload")
            .field("id", &self.id)
            .field("filename", &self.filename)
            .field("size_bytes", &self.size_bytes)
            .field("state", &self.state)
            .field(
                "encoded_len",
                &self.encoded_content.as_ref().map(String::len),
            )
            .finish()
    }
}

/// Display copy of a record, safe to hand to the GUI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordView {
    pub id: RecordId,
    pub filename: String,
    pub size_bytes: u64,
    pub state: UploadState,
    pub has_content: bool,
}

impl From<&PendingUpload> for RecordView {
    fn from(record: &PendingUpload) -> Self {
        Self {
            id: record.id,
            filename: record.filename.clone(),
            size_bytes: record.size_bytes,
            state: record.state,
            has_content: record.encoded_content.is_some(),
        }
    }
}
