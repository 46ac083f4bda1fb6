// Store module - ordered collection of pending uploads
// Each appended file is read and encoded in the background; records are
// updated by identity so completion order never affects list order.

pub mod types;
pub mod upload_store;

#[cfg(test)]
mod tests;

pub use types::{PendingUpload, ReadMode, RecordId, RecordView, UploadState};
pub use upload_store::UploadStore;
