//! Hex text to bytes and back.

use thiserror::Error;

/// Text the user typed could not be turned into bytes.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    /// Odd digit count or a character outside `0-9a-fA-F`.
    #[error("invalid byte encoding in {field}")]
    InvalidByteEncoding {
        /// Which argument was being parsed.
        field: &'static str,
        /// Underlying decoder error.
        source: hex::FromHexError,
    },
}

/// Parses hex digits into bytes. Whitespace is ignored so grouped input like
/// `0011 2233` is accepted; no length check happens here.
pub fn parse_hex(field: &'static str, text: &str) -> Result<Vec<u8>, InputError> {
    let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(digits).map_err(|source| InputError::InvalidByteEncoding { field, source })
}

/// Lowercase hex of `bytes`.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
