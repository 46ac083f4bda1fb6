use crate::codec::{self, DecodeResult, format_data_url};
use serde::{Deserialize, Serialize};

/// Mime type used for every download link, so the browser view saves
/// instead of rendering.
pub const DOWNLOAD_MIME_TYPE: &str = "application/octet-stream";

/// Read-only snapshot of one committed upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadableArtifact {
    pub filename: String,
    pub encoded_content: String,
}

/// Pair a filename with its base64 content. Empty content is allowed and
/// yields a zero-byte download.
pub fn build_downloadable_artifact(
    filename: impl Into<String>,
    encoded_content: impl Into<String>,
) -> DownloadableArtifact {
    DownloadableArtifact {
        filename: filename.into(),
        encoded_content: encoded_content.into(),
    }
}

impl DownloadableArtifact {
    /// Link target: `data:application/octet-stream;base64,<content>`.
    pub fn data_url(&self) -> String {
        format_data_url(DOWNLOAD_MIME_TYPE, &self.encoded_content)
    }

    pub fn decode(&self) -> DecodeResult<Vec<u8>> {
        codec::decode(&self.encoded_content)
    }

    /// Size of the decoded file, computed from the text length and padding.
    pub fn decoded_len(&self) -> usize {
        codec::decoded_len(&self.encoded_content)
    }

    pub fn is_empty(&self) -> bool {
        self.encoded_content.is_empty()
    }
}
