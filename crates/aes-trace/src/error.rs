//! Errors raised at the public boundary.

use thiserror::Error;

use crate::block::BLOCK_BYTES;

/// Contract violations detected before any computation starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The cipher key is not exactly 16 bytes.
    #[error("invalid key length: expected {expected} bytes, got {got}", expected = BLOCK_BYTES)]
    InvalidKeyLength {
        /// Length that was supplied.
        got: usize,
    },
    /// The input block is not exactly 16 bytes.
    #[error("invalid block length: expected {expected} bytes, got {got}", expected = BLOCK_BYTES)]
    InvalidBlockLength {
        /// Length that was supplied.
        got: usize,
    },
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;
