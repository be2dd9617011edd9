//! Step recording.
//!
//! The round driver reports every primitive it applies to a [`StepSink`].
//! [`NoTrace`] discards the reports; a `Vec<Step>` keeps them in order.

use core::fmt;

use log::trace;

use crate::block::{cell, Block};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};

/// A primitive round transformation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Operation {
    /// XOR with the round key. Used in both directions.
    AddRoundKey,
    /// Forward byte substitution.
    SubBytes,
    /// Forward row rotation.
    ShiftRows,
    /// Forward column mixing.
    MixColumns,
    /// Inverse byte substitution.
    InvSubBytes,
    /// Inverse row rotation.
    InvShiftRows,
    /// Inverse column mixing.
    InvMixColumns,
}

impl Operation {
    /// Name used when rendering a step.
    pub fn name(self) -> &'static str {
        match self {
            Operation::AddRoundKey => "AddRoundKey",
            Operation::SubBytes => "SubBytes",
            Operation::ShiftRows => "ShiftRows",
            Operation::MixColumns => "MixColumns",
            Operation::InvSubBytes => "InvSubBytes",
            Operation::InvShiftRows => "InvShiftRows",
            Operation::InvMixColumns => "InvMixColumns",
        }
    }

    /// Applies the transformation to `state`. Only [`Operation::AddRoundKey`]
    /// reads `round_key`.
    pub fn apply(self, state: &mut Block, round_key: &Block) {
        match self {
            Operation::AddRoundKey => add_round_key(state, round_key),
            Operation::SubBytes => sub_bytes(state),
            Operation::ShiftRows => shift_rows(state),
            Operation::MixColumns => mix_columns(state),
            Operation::InvSubBytes => inv_sub_bytes(state),
            Operation::InvShiftRows => inv_shift_rows(state),
            Operation::InvMixColumns => inv_mix_columns(state),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of the state right after one primitive ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Step {
    /// Round the primitive belongs to; for decryption this counts down from 10.
    pub round: usize,
    /// Which primitive ran.
    pub operation: Operation,
    /// State after the primitive, column-major.
    pub state: Block,
}

impl Step {
    /// Flat lowercase hex of the state.
    pub fn state_hex(&self) -> String {
        hex_string(&self.state)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Round {}: {}", self.round, self.operation)?;
        write_state(f, &self.state)
    }
}

/// Receives each primitive application in execution order.
pub trait StepSink {
    /// Called after `operation` has been applied for `round`.
    fn record(&mut self, round: usize, operation: Operation, state: &Block);
}

/// Sink that keeps nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl StepSink for NoTrace {
    #[inline]
    fn record(&mut self, _round: usize, _operation: Operation, _state: &Block) {}
}

impl StepSink for Vec<Step> {
    fn record(&mut self, round: usize, operation: Operation, state: &Block) {
        trace!("round {round} {operation}: {}", hex_string(state));
        self.push(Step {
            round,
            operation,
            state: *state,
        });
    }
}

/// Renders the state as a 4x4 grid (one matrix row per line) plus a flat hex line.
pub(crate) fn write_state(f: &mut fmt::Formatter<'_>, state: &Block) -> fmt::Result {
    for row in 0..4 {
        f.write_str("\n ")?;
        for col in 0..4 {
            write!(f, " {:02x}", state[cell(row, col)])?;
        }
    }
    write!(f, "\n  hex: {}", hex_string(state))
}

pub(crate) fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_renders_round_operation_and_grid() {
        let step = Step {
            round: 3,
            operation: Operation::MixColumns,
            state: core::array::from_fn(|i| i as u8),
        };
        let expected = "Round 3: MixColumns\n\
                        \x20 00 04 08 0c\n\
                        \x20 01 05 09 0d\n\
                        \x20 02 06 0a 0e\n\
                        \x20 03 07 0b 0f\n\
                        \x20 hex: 000102030405060708090a0b0c0d0e0f";
        assert_eq!(step.to_string(), expected);
    }

    #[test]
    fn vec_sink_keeps_order() {
        let mut steps: Vec<Step> = Vec::new();
        steps.record(0, Operation::AddRoundKey, &[1; 16]);
        steps.record(1, Operation::SubBytes, &[2; 16]);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].operation, Operation::AddRoundKey);
        assert_eq!(steps[1].round, 1);
        assert_eq!(steps[1].state, [2; 16]);
    }

    #[test]
    fn operation_apply_dispatches_to_primitive() {
        let key = [0x5a; 16];
        let mut state = [0u8; 16];
        Operation::AddRoundKey.apply(&mut state, &key);
        assert_eq!(state, key);
        Operation::SubBytes.apply(&mut state, &key);
        assert_eq!(state, [crate::tables::sbox(0x5a); 16]);
    }
}
