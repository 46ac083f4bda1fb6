pub mod args;
pub mod cli;
pub mod codec;
pub mod config;
pub mod download;
pub mod gui;
pub mod reader;
pub mod store;

pub use config::AppConfig;
pub use download::{DownloadableArtifact, build_downloadable_artifact};
pub use store::{ReadMode, UploadStore};
