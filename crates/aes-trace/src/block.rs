//! Block representation helpers.
//!
//! A block doubles as the state matrix: byte `i` sits at row `i % 4`,
//! column `i / 4`.

use crate::error::{Error, Result};

/// Size of a block (and of an AES-128 key) in bytes.
pub const BLOCK_BYTES: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_BYTES];

/// Copies a caller-supplied slice into a block, rejecting any other length.
pub fn block_from_slice(bytes: &[u8]) -> Result<Block> {
    bytes
        .try_into()
        .map_err(|_| Error::InvalidBlockLength { got: bytes.len() })
}

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Index of the byte at (`row`, `col`) in column-major layout.
#[inline]
pub(crate) const fn cell(row: usize, col: usize) -> usize {
    col * 4 + row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_of_wrong_length_is_rejected() {
        assert_eq!(
            block_from_slice(&[0u8; 15]),
            Err(Error::InvalidBlockLength { got: 15 })
        );
        assert_eq!(
            block_from_slice(&[0u8; 17]),
            Err(Error::InvalidBlockLength { got: 17 })
        );
        assert_eq!(block_from_slice(&[7u8; 16]), Ok([7u8; 16]));
    }

    #[test]
    fn cell_is_column_major() {
        assert_eq!(cell(0, 0), 0);
        assert_eq!(cell(1, 0), 1);
        assert_eq!(cell(0, 1), 4);
        assert_eq!(cell(3, 3), 15);
    }
}
