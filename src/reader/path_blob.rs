// Blob for a file on the local file system (what desktop drop events deliver)
use super::error::{ReadError, ReadResult};
use super::types::{Blob, ReadSink};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct PathBlob {
    path: PathBuf,
    name: String,
    size: u64,
}

impl PathBlob {
    /// Build a blob for `path`, reading name and size from the file system.
    pub async fn open(path: impl Into<PathBuf>) -> ReadResult<Self> {
        let path = path.into();
        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|e| ReadError::Failed {
                reason: format!("{}: {e}", path.display()),
            })?;
        if !metadata.is_file() {
            return Err(ReadError::Failed {
                reason: format!("{} is not a regular file", path.display()),
            });
        }
        let name = file_name_of(&path);
        Ok(Self {
            path,
            name,
            size: metadata.len(),
        })
    }

    /// Build a blob from metadata already supplied by the drop event.
    pub fn with_metadata(path: impl Into<PathBuf>, name: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            size,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl Blob for PathBlob {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn start_read(self: Arc<Self>, sink: ReadSink) {
        tokio::spawn(async move {
            match tokio::fs::read(&self.path).await {
                Ok(bytes) => sink.load(bytes),
                Err(e) => sink.fail(format!("{}: {e}", self.path.display())),
            }
        });
    }
}
