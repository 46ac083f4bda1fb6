// Reader module - asynchronous file reading for dropped files
// A `Blob` exposes a callback-style read; `read_as_bytes` and
// `read_as_data_url` wrap that callback once into a single-resolution future.

pub mod adapter;
pub mod error;
pub mod memory_blob;
pub mod path_blob;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

// Re-export the main types and functions for easy access
pub use adapter::{read_as_bytes, read_as_data_url};
pub use error::{ReadError, ReadResult};
pub use memory_blob::MemoryBlob;
pub use path_blob::PathBlob;
pub use types::{Blob, DEFAULT_MIME_TYPE, ReadSink, SharedBlob};
