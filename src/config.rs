//! Runtime configuration assembled from command-line flags and environment

use crate::args::Args;
use crate::store::ReadMode;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable overriding the default download folder.
pub const DOWNLOAD_DIR_ENV: &str = "DROP_B64_DOWNLOAD_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// How the upload store turns blobs into base64
    pub read_mode: ReadMode,
    /// Folder the Save buttons write into
    pub download_dir: PathBuf,
    /// Debug logging enabled
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            read_mode: ReadMode::Bytes,
            download_dir: resolve_download_dir(None, None),
            debug: false,
        }
    }
}

impl AppConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            read_mode: if args.data_url {
                ReadMode::DataUrl
            } else {
                ReadMode::Bytes
            },
            download_dir: resolve_download_dir(
                args.download_dir.as_deref(),
                std::env::var_os(DOWNLOAD_DIR_ENV),
            ),
            debug: args.debug,
        }
    }
}

/// Pick the download folder: explicit flag, then environment, then
/// `~/Downloads`, then the working directory.
pub fn resolve_download_dir(flag: Option<&Path>, env_value: Option<OsString>) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }
    if let Some(dir) = env_value.filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    homedir::my_home()
        .ok()
        .flatten()
        .map(|home| home.join("Downloads"))
        .unwrap_or_else(|| PathBuf::from("."))
}
