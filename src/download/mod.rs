// Download module - committed uploads as downloadable artifacts
// An artifact is a filename plus base64 content. It can be rendered as a
// data URL link, or saved straight to disk as the programmatic trigger.

pub mod artifact;
pub mod error;
pub mod save;


pub use artifact::{DOWNLOAD_MIME_TYPE, DownloadableArtifact, build_downloadable_artifact};
pub use error::{DownloadError, DownloadResult};
pub use save::sanitize_filename;
