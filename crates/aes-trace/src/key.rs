//! Key types for AES-128.

use crate::block::{Block, BLOCK_BYTES};
use crate::error::{Error, Result};

/// Number of round keys produced for AES-128.
pub const ROUND_KEY_COUNT: usize = 11;

/// AES-128 key wrapper.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; BLOCK_BYTES]);

impl From<[u8; BLOCK_BYTES]> for Aes128Key {
    fn from(value: [u8; BLOCK_BYTES]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        bytes
            .try_into()
            .map(Self)
            .map_err(|_| Error::InvalidKeyLength { got: bytes.len() })
    }
}

// Key material stays out of debug output.
impl core::fmt::Debug for Aes128Key {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Aes128Key(..)")
    }
}

/// Expanded round keys for AES-128.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; ROUND_KEY_COUNT]);

// Round key 0 is the cipher key itself.
impl core::fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "RoundKeys([..; {}])", self.0.len())
    }
}

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Iterates over the round keys in schedule order.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_from_slice_checks_length() {
        assert!(Aes128Key::try_from(&[0u8; 16][..]).is_ok());
        assert_eq!(
            Aes128Key::try_from(&[0u8; 15][..]),
            Err(Error::InvalidKeyLength { got: 15 })
        );
        assert_eq!(
            Aes128Key::try_from(&[0u8; 17][..]),
            Err(Error::InvalidKeyLength { got: 17 })
        );
    }

    #[test]
    fn debug_hides_key_bytes() {
        let key = Aes128Key::from([0xab; 16]);
        assert_eq!(format!("{key:?}"), "Aes128Key(..)");
    }

    #[test]
    fn debug_hides_round_keys() {
        let round_keys = RoundKeys([[0xab; 16]; ROUND_KEY_COUNT]);
        let text = format!("{round_keys:?}");
        assert_eq!(text, "RoundKeys([..; 11])");
        assert!(!text.contains("171"));
    }
}
