//! `data:` URL formatting and parsing for base64 payloads.

use super::error::{DecodeError, DecodeResult};

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// A borrowed view of a base64 data URL split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataUrl<'a> {
    pub mime_type: &'a str,
    pub payload: &'a str,
}

impl<'a> DataUrl<'a> {
    /// Decode the payload into raw bytes.
    pub fn decode(&self) -> DecodeResult<Vec<u8>> {
        super::decode(self.payload)
    }
}

/// Build `data:<mime_type>;base64,<payload>`.
pub fn format_data_url(mime_type: &str, payload: &str) -> String {
    format!("{SCHEME}{mime_type}{BASE64_MARKER}{payload}")
}

/// Split a base64 data URL into mime type and payload.
///
/// The payload is not validated here; call [`DataUrl::decode`] for that.
pub fn parse_data_url(url: &str) -> DecodeResult<DataUrl<'_>> {
    let rest = url.strip_prefix(SCHEME).ok_or_else(|| DecodeError::NotDataUrl {
        reason: "missing 'data:' scheme".to_string(),
    })?;
    let (mime_type, payload) =
        rest.split_once(BASE64_MARKER)
            .ok_or_else(|| DecodeError::NotDataUrl {
                reason: "missing ';base64,' marker".to_string(),
            })?;
    Ok(DataUrl { mime_type, payload })
}
