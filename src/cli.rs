//! Headless encode mode: the same store pipeline as the GUI, driven from argv

use crate::download::DownloadableArtifact;
use crate::reader::{PathBlob, SharedBlob};
use crate::store::{ReadMode, UploadStore};
use std::path::PathBuf;
use std::sync::Arc;

/// Append every path to a fresh store, wait for all reads, then commit.
/// Unreadable files stay in the batch with empty content.
pub async fn encode_files(paths: &[PathBuf], mode: ReadMode) -> Vec<DownloadableArtifact> {
    let store = UploadStore::new(mode);
    for path in paths {
        let blob = match PathBlob::open(path).await {
            Ok(blob) => blob,
            Err(e) => {
                log::warn!("⚠️ {}", e);
                // Keep the slot; the read will fail and leave it empty
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                PathBlob::with_metadata(path, name, 0)
            }
        };
        let blob: SharedBlob = Arc::new(blob);
        store.append_blob(blob);
    }
    store.wait_settled().await;
    store.commit()
}

/// `filename<TAB>base64`
pub fn format_line(artifact: &DownloadableArtifact) -> String {
    format!("{}\t{}", artifact.filename, artifact.encoded_content)
}
