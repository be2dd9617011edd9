//! AES-128 key schedule.

use core::fmt;

use crate::block::Block;
use crate::key::{Aes128Key, RoundKeys, ROUND_KEY_COUNT};
use crate::tables::{sbox, RCON};
use crate::trace::{hex_string, write_state};

const WORDS: usize = 4 * ROUND_KEY_COUNT;

/// How the first word of a round key was derived from the word before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WordDerivation {
    /// Index of the derived word in the 44-word schedule.
    pub word_index: usize,
    /// The preceding word `w[i - 1]`.
    pub previous: [u8; 4],
    /// `RotWord(previous)`.
    pub rotated: [u8; 4],
    /// `SubWord(rotated)`.
    pub substituted: [u8; 4],
    /// Round constant folded into the first byte.
    pub rcon: u8,
}

/// One stage of key expansion: a finished round key and, past round 0, how it began.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct KeyExpansionStep {
    /// Round key index (0..=10).
    pub round: usize,
    /// `None` for round 0, which is the cipher key itself.
    pub derivation: Option<WordDerivation>,
    /// The round key produced at this stage.
    pub round_key: Block,
}

impl fmt::Display for KeyExpansionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.derivation {
            None => write!(f, "Key expansion round {}: cipher key", self.round)?,
            Some(d) => {
                write!(f, "Key expansion round {}: w[{}]", self.round, d.word_index)?;
                write!(
                    f,
                    "\n  RotWord({}) = {}",
                    hex_string(&d.previous),
                    hex_string(&d.rotated)
                )?;
                write!(
                    f,
                    "\n  SubWord({}) = {}",
                    hex_string(&d.rotated),
                    hex_string(&d.substituted)
                )?;
                write!(f, "\n  Rcon = {:02x}", d.rcon)?;
            }
        }
        write_state(f, &self.round_key)
    }
}

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

fn expand_words(key: &Aes128Key) -> ([u32; WORDS], [WordDerivation; ROUND_KEY_COUNT - 1]) {
    let mut w = [0u32; WORDS];
    for (i, word) in w.iter_mut().take(4).enumerate() {
        let k = &key.0;
        *word = u32::from_be_bytes([k[4 * i], k[4 * i + 1], k[4 * i + 2], k[4 * i + 3]]);
    }

    let mut derivations = [WordDerivation {
        word_index: 0,
        previous: [0; 4],
        rotated: [0; 4],
        substituted: [0; 4],
        rcon: 0,
    }; ROUND_KEY_COUNT - 1];

    for i in 4..WORDS {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            let rcon = RCON[(i / 4) - 1];
            let rotated = rot_word(temp);
            let substituted = sub_word(rotated);
            derivations[(i / 4) - 1] = WordDerivation {
                word_index: i,
                previous: temp.to_be_bytes(),
                rotated: rotated.to_be_bytes(),
                substituted: substituted.to_be_bytes(),
                rcon,
            };
            temp = substituted ^ (u32::from(rcon) << 24);
        }
        w[i] = w[i - 4] ^ temp;
    }

    (w, derivations)
}

fn pack_round_keys(w: &[u32; WORDS]) -> RoundKeys {
    let mut round_keys = [[0u8; 16]; ROUND_KEY_COUNT];
    for (round_key, words) in round_keys.iter_mut().zip(w.chunks_exact(4)) {
        for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
            dst.copy_from_slice(&word.to_be_bytes());
        }
    }
    RoundKeys(round_keys)
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let (w, _) = expand_words(key);
    pack_round_keys(&w)
}

/// Expands a key and reports each of the 11 stages.
pub fn trace_key_expansion(key: &Aes128Key) -> Vec<KeyExpansionStep> {
    let (w, derivations) = expand_words(key);
    let round_keys = pack_round_keys(&w);
    round_keys
        .iter()
        .enumerate()
        .map(|(round, round_key)| KeyExpansionStep {
            round,
            derivation: round.checked_sub(1).map(|i| derivations[i]),
            round_key: *round_key,
        })
        .collect()
}
