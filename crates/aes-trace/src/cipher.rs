//! AES-128 block encryption/decryption driven through a [`StepSink`].

use crate::block::Block;
use crate::key::RoundKeys;
use crate::trace::{NoTrace, Operation, StepSink};

/// Number of rounds for AES-128.
pub const ROUNDS: usize = 10;

/// Steps one block produces: the initial key addition, nine full rounds, and
/// the final round.
pub const STEPS_PER_BLOCK: usize =
    1 + (ROUNDS - 1) * FULL_ROUND.len() + FINAL_ROUND.len();

const FULL_ROUND: [Operation; 4] = [
    Operation::SubBytes,
    Operation::ShiftRows,
    Operation::MixColumns,
    Operation::AddRoundKey,
];

// No column mixing in the last round.
const FINAL_ROUND: [Operation; 3] = [
    Operation::SubBytes,
    Operation::ShiftRows,
    Operation::AddRoundKey,
];

// InvMixColumns follows the key addition.
const INV_FULL_ROUND: [Operation; 4] = [
    Operation::InvShiftRows,
    Operation::InvSubBytes,
    Operation::AddRoundKey,
    Operation::InvMixColumns,
];

const INV_FINAL_ROUND: [Operation; 3] = [
    Operation::InvShiftRows,
    Operation::InvSubBytes,
    Operation::AddRoundKey,
];

fn run_round<S: StepSink>(
    state: &mut Block,
    round: usize,
    ops: &[Operation],
    round_keys: &RoundKeys,
    sink: &mut S,
) {
    let round_key = round_keys.get(round);
    for &op in ops {
        op.apply(state, round_key);
        sink.record(round, op, state);
    }
}

/// Encrypts a block, reporting every primitive to `sink`.
pub fn encrypt_with<S: StepSink>(block: &Block, round_keys: &RoundKeys, sink: &mut S) -> Block {
    let mut state = *block;

    run_round(&mut state, 0, &[Operation::AddRoundKey], round_keys, sink);
    for round in 1..ROUNDS {
        run_round(&mut state, round, &FULL_ROUND, round_keys, sink);
    }
    run_round(&mut state, ROUNDS, &FINAL_ROUND, round_keys, sink);

    state
}

/// Decrypts a block, reporting every primitive to `sink`.
pub fn decrypt_with<S: StepSink>(block: &Block, round_keys: &RoundKeys, sink: &mut S) -> Block {
    let mut state = *block;

    run_round(&mut state, ROUNDS, &[Operation::AddRoundKey], round_keys, sink);
    for round in (1..ROUNDS).rev() {
        run_round(&mut state, round, &INV_FULL_ROUND, round_keys, sink);
    }
    run_round(&mut state, 0, &INV_FINAL_ROUND, round_keys, sink);

    state
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    encrypt_with(block, round_keys, &mut NoTrace)
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    decrypt_with(block, round_keys, &mut NoTrace)
}
