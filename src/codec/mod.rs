// Codec module - base64 text encoding for dropped file contents
// Converts raw byte buffers to standard base64 (and back) and handles the
// `data:<mime>;base64,<payload>` form used as download link targets.

pub mod data_url;
pub mod error;

#[cfg(test)]
mod tests;

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, PAD, STANDARD};

pub use data_url::{DataUrl, format_data_url, parse_data_url};
pub use error::{DecodeError, DecodeResult};

/// Encode bytes as standard base64 with `=` padding and no line wrapping.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

// Padding is required, unused bits in the last symbol are ignored
const DECODER: GeneralPurpose =
    GeneralPurpose::new(&alphabet::STANDARD, PAD.with_decode_allow_trailing_bits(true));

/// Decode padded standard base64 text back into bytes.
pub fn decode(text: &str) -> DecodeResult<Vec<u8>> {
    if text.len() % 4 != 0 {
        return Err(DecodeError::InvalidLength { length: text.len() });
    }
    DECODER.decode(text).map_err(DecodeError::from)
}

/// Decoded size of padded base64 text, without decoding it.
pub fn decoded_len(text: &str) -> usize {
    let padding = text.bytes().rev().take(2).take_while(|&b| b == b'=').count();
    (text.len() / 4 * 3).saturating_sub(padding)
}
