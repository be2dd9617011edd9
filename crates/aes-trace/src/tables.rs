//! Substitution tables and round constants.

use crate::field::inverse;

/// Forward substitution table: field inverse followed by the affine transform.
pub static SBOX: [u8; 256] = build_sbox();

/// Positional inverse of [`SBOX`].
pub static INV_SBOX: [u8; 256] = build_inv_sbox();

/// Round constants for key expansion, `RCON[i] = x^i` in GF(2^8).
pub const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// Looks up `byte` in the forward substitution table.
#[inline]
pub fn sbox(byte: u8) -> u8 {
    SBOX[byte as usize]
}

/// Looks up `byte` in the inverse substitution table.
#[inline]
pub fn inv_sbox(byte: u8) -> u8 {
    INV_SBOX[byte as usize]
}

const fn affine(b: u8) -> u8 {
    b ^ b.rotate_left(1) ^ b.rotate_left(2) ^ b.rotate_left(3) ^ b.rotate_left(4) ^ 0x63
}

const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = affine(inverse(i as u8));
        i += 1;
    }
    table
}

const fn build_inv_sbox() -> [u8; 256] {
    let forward = build_sbox();
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[forward[i] as usize] = i as u8;
        i += 1;
    }
    table
}
