//! AES round transformations.
//!
//! Each primitive rewrites the state in place. [`add_round_key`] is its own
//! inverse and serves both directions.

use crate::block::{cell, xor_in_place, Block};
use crate::field::{gmul, xtime};
use crate::tables::{inv_sbox, sbox};

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Rotates row `r` left by `r` positions.
pub fn shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[cell(row, col)] = src[cell(row, (col + row) % 4)];
        }
    }
}

/// Rotates row `r` right by `r` positions.
pub fn inv_shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[cell(row, (col + row) % 4)] = src[cell(row, col)];
        }
    }
}

fn mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3;
    col[1] = a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3;
    col[2] = a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3);
    col[3] = (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3);
}

fn inv_mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = gmul(a0, 0x0e) ^ gmul(a1, 0x0b) ^ gmul(a2, 0x0d) ^ gmul(a3, 0x09);
    col[1] = gmul(a0, 0x09) ^ gmul(a1, 0x0e) ^ gmul(a2, 0x0b) ^ gmul(a3, 0x0d);
    col[2] = gmul(a0, 0x0d) ^ gmul(a1, 0x09) ^ gmul(a2, 0x0e) ^ gmul(a3, 0x0b);
    col[3] = gmul(a0, 0x0b) ^ gmul(a1, 0x0d) ^ gmul(a2, 0x09) ^ gmul(a3, 0x0e);
}

fn for_each_column(state: &mut Block, f: fn(&mut [u8; 4])) {
    for chunk in state.chunks_exact_mut(4) {
        let mut column = [chunk[0], chunk[1], chunk[2], chunk[3]];
        f(&mut column);
        chunk.copy_from_slice(&column);
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for_each_column(state, mix_single_column);
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for_each_column(state, inv_mix_single_column);
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn sequential() -> Block {
        core::array::from_fn(|i| i as u8)
    }

    #[test]
    fn shift_rows_rotates_each_row_left_by_its_index() {
        let mut state = sequential();
        shift_rows(&mut state);
        // rows read left to right after the shift
        let rows: Vec<[u8; 4]> = (0..4)
            .map(|r| core::array::from_fn(|c| state[cell(r, c)]))
            .collect();
        assert_eq!(rows[0], [0, 4, 8, 12]);
        assert_eq!(rows[1], [5, 9, 13, 1]);
        assert_eq!(rows[2], [10, 14, 2, 6]);
        assert_eq!(rows[3], [15, 3, 7, 11]);
    }

    #[test]
    fn mix_columns_matches_known_column() {
        // Standard test column db 13 53 45 -> 8e 4d a1 bc
        let mut state = [0u8; 16];
        state[..4].copy_from_slice(&[0xdb, 0x13, 0x53, 0x45]);
        state[4..8].copy_from_slice(&[0x01, 0x01, 0x01, 0x01]);
        mix_columns(&mut state);
        assert_eq!(&state[..4], &[0x8e, 0x4d, 0xa1, 0xbc]);
        assert_eq!(&state[4..8], &[0x01, 0x01, 0x01, 0x01]);
    }

    #[test]
    fn inverse_primitives_undo_forward_ones() {
        let mut rng = ChaCha20Rng::from_seed([9u8; 32]);
        for _ in 0..64 {
            let mut original = [0u8; 16];
            rng.fill_bytes(&mut original);

            let mut state = original;
            sub_bytes(&mut state);
            inv_sub_bytes(&mut state);
            assert_eq!(state, original);

            shift_rows(&mut state);
            inv_shift_rows(&mut state);
            assert_eq!(state, original);

            mix_columns(&mut state);
            inv_mix_columns(&mut state);
            assert_eq!(state, original);

            let mut key = [0u8; 16];
            rng.fill_bytes(&mut key);
            add_round_key(&mut state, &key);
            add_round_key(&mut state, &key);
            assert_eq!(state, original);
        }
    }

    #[test]
    fn single_byte_change_spreads_across_column() {
        let mut a = [0u8; 16];
        let mut b = a;
        b[0] = 1;
        mix_columns(&mut a);
        mix_columns(&mut b);
        for row in 0..4 {
            assert_ne!(a[row], b[row]);
        }
        assert_eq!(a[4..], b[4..]);
    }
}
