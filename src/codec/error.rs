use thiserror::Error;

/// A specialized `Result` type for codec operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors produced while decoding base64 text or data URLs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Invalid base64 character {character:?} at offset {offset}")]
    InvalidCharacter { character: char, offset: usize },

    #[error("Invalid base64 length {length}: padded input must be a multiple of 4")]
    InvalidLength { length: usize },

    #[error("Invalid base64 padding")]
    InvalidPadding,

    #[error("Not a base64 data URL: {reason}")]
    NotDataUrl { reason: String },
}

impl From<base64::DecodeError> for DecodeError {
    fn from(err: base64::DecodeError) -> Self {
        match err {
            base64::DecodeError::InvalidByte(offset, byte) => {
                // '=' in the middle of the input is a padding problem, not an alphabet one
                if byte == b'=' {
                    DecodeError::InvalidPadding
                } else {
                    DecodeError::InvalidCharacter {
                        character: byte as char,
                        offset,
                    }
                }
            }
            base64::DecodeError::InvalidLength(length) => DecodeError::InvalidLength { length },
            // Only reachable with strict trailing bits, which the decoder turns off
            base64::DecodeError::InvalidLastSymbol(..) => DecodeError::InvalidPadding,
            base64::DecodeError::InvalidPadding => DecodeError::InvalidPadding,
        }
    }
}
