//! Public entry point: an engine bound to one key that returns results
//! together with their step trace.

use log::debug;

use crate::block::{block_from_slice, Block};
use crate::cipher::{decrypt_with, encrypt_with, STEPS_PER_BLOCK};
use crate::error::Result;
use crate::key::{Aes128Key, RoundKeys};
use crate::schedule::{expand_key, trace_key_expansion, KeyExpansionStep};
use crate::trace::Step;

/// Result of [`TracingCipher::encrypt`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encryption {
    /// The encrypted block.
    pub cipher_text: Block,
    /// Every primitive applied, in order.
    pub steps: Vec<Step>,
}

/// Result of [`TracingCipher::decrypt`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decryption {
    /// The decrypted block.
    pub plain_text: Block,
    /// Every primitive applied, in order.
    pub steps: Vec<Step>,
}

impl Encryption {
    /// Renders each step as text.
    pub fn lines(&self) -> Vec<String> {
        render(&self.steps)
    }
}

impl Decryption {
    /// Renders each step as text.
    pub fn lines(&self) -> Vec<String> {
        render(&self.steps)
    }
}

fn render(steps: &[Step]) -> Vec<String> {
    steps.iter().map(ToString::to_string).collect()
}

/// AES-128 engine that records its state after every primitive.
///
/// The key schedule is computed once in the constructor and never changes.
/// Calls do not share state, so one engine can serve several threads.
#[derive(Clone, Debug)]
pub struct TracingCipher {
    key: Aes128Key,
    round_keys: RoundKeys,
}

impl TracingCipher {
    /// Builds an engine from raw key bytes, which must be exactly 16 long.
    pub fn new(key: &[u8]) -> Result<Self> {
        let key = Aes128Key::try_from(key)?;
        Ok(Self::from_key(key))
    }

    /// Builds an engine from an already validated key.
    pub fn from_key(key: Aes128Key) -> Self {
        let round_keys = expand_key(&key);
        debug!("expanded AES-128 key schedule");
        Self { key, round_keys }
    }

    /// The expanded round keys.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Replays key expansion for this engine's key, one entry per round key.
    pub fn key_expansion(&self) -> Vec<KeyExpansionStep> {
        trace_key_expansion(&self.key)
    }

    /// Encrypts one 16-byte block.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Encryption> {
        let block = block_from_slice(plaintext)?;
        let mut steps: Vec<Step> = Vec::with_capacity(STEPS_PER_BLOCK);
        let cipher_text = encrypt_with(&block, &self.round_keys, &mut steps);
        debug!("encrypted block in {} steps", steps.len());
        Ok(Encryption { cipher_text, steps })
    }

    /// Decrypts one 16-byte block.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Decryption> {
        let block = block_from_slice(ciphertext)?;
        let mut steps: Vec<Step> = Vec::with_capacity(STEPS_PER_BLOCK);
        let plain_text = decrypt_with(&block, &self.round_keys, &mut steps);
        debug!("decrypted block in {} steps", steps.len());
        Ok(Decryption { plain_text, steps })
    }
}
