// Programmatic download: decode an artifact and write it into a folder
use super::artifact::DownloadableArtifact;
use super::error::{DownloadError, DownloadResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

const FALLBACK_NAME: &str = "download";
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Reduce a suggested filename to a bare file name (no directories, no
/// `.`/`..`), falling back to `download`.
pub fn sanitize_filename(filename: &str) -> String {
    let last = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();
    match last {
        "" | "." | ".." => FALLBACK_NAME.to_string(),
        name => name.to_string(),
    }
}

/// `name.ext` -> `name (n).ext`
fn numbered(name: &str, n: u32) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem} ({n}).{ext}"),
        _ => format!("{name} ({n})"),
    }
}

impl DownloadableArtifact {
    /// Decode the content and save it under `dir`, never overwriting an
    /// existing file. Returns the path written.
    pub async fn save_into(&self, dir: &Path) -> DownloadResult<PathBuf> {
        let bytes = self.decode()?;
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| DownloadError::Io {
                path: dir.to_path_buf(),
                source,
            })?;

        let name = sanitize_filename(&self.filename);
        for attempt in 0..MAX_NAME_ATTEMPTS {
            let candidate = if attempt == 0 {
                dir.join(&name)
            } else {
                dir.join(numbered(&name, attempt))
            };
            let opened = tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&candidate)
                .await;
            let mut file = match opened {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(source) => {
                    return Err(DownloadError::Io {
                        path: candidate,
                        source,
                    });
                }
            };
            let written = async {
                file.write_all(&bytes).await?;
                file.flush().await
            }
            .await;
            written.map_err(|source| DownloadError::Io {
                path: candidate.clone(),
                source,
            })?;
            log::info!("💾 Saved '{}' ({} bytes) to {}", self.filename, bytes.len(), candidate.display());
            return Ok(candidate);
        }
        Err(DownloadError::NoFreeName {
            filename: self.filename.clone(),
        })
    }
}
