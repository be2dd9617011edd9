//! AES-128 engine that exposes its own internals.
//!
//! Alongside each result the engine returns the state after every primitive
//! it applied (AddRoundKey, SubBytes, ShiftRows, MixColumns and their
//! inverses), so a front end can walk a learner through the cipher step by
//! step. The crate provides:
//! - Compile-time S-box tables derived from GF(2^8) arithmetic.
//! - The AES-128 key schedule, plain or with a per-round trace.
//! - Single-block encryption and decryption, plain or traced.
//! - A clamped cursor for replaying a trace.
//!
//! The implementation aims for clarity rather than constant-time guarantees;
//! it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod engine;
mod error;
mod field;
mod key;
mod playback;
mod round;
mod schedule;
mod tables;
mod trace;

pub use crate::block::{block_from_slice, Block, BLOCK_BYTES};
pub use crate::cipher::{
    decrypt_block, decrypt_with, encrypt_block, encrypt_with, ROUNDS, STEPS_PER_BLOCK,
};
pub use crate::engine::{Decryption, Encryption, TracingCipher};
pub use crate::error::{Error, Result};
pub use crate::key::{Aes128Key, RoundKeys, ROUND_KEY_COUNT};
pub use crate::playback::Playback;
pub use crate::schedule::{expand_key, trace_key_expansion, KeyExpansionStep, WordDerivation};
pub use crate::tables::{inv_sbox, sbox, INV_SBOX, RCON, SBOX};
pub use crate::trace::{NoTrace, Operation, Step, StepSink};
