//! Deterministic entropy stream.

use crate::{Error, Result};
use core::fmt::{self, Debug};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Shake256, Shake256Reader};

/// Deterministic random number generator: a SHAKE-256 stream seeded with 64
/// bytes of BIP85 application entropy.
///
/// Successive [`Drng::read`] calls return consecutive, non-overlapping
/// spans of the stream, so reading `a` then `b` bytes yields the same bytes
/// as a single read of `a + b`.
pub struct Drng {
    reader: Shake256Reader,
}

impl Drng {
    /// Seed length the construction requires.
    pub const SEED_SIZE: usize = 64;

    /// Initialize the stream from exactly 64 bytes of seed material.
    pub fn new(seed: &[u8]) -> Result<Self> {
        if seed.len() != Self::SEED_SIZE {
            return Err(Error::SeedLength);
        }

        let mut sponge = Shake256::default();
        sponge.update(seed);

        Ok(Drng {
            reader: sponge.finalize_xof(),
        })
    }

    /// Read the next `n` bytes of the stream.
    pub fn read(&mut self, n: usize) -> Vec<u8> {
        let mut out = vec![0u8; n];
        self.reader.read(&mut out);
        out
    }

    /// Fill `buf` with the next bytes of the stream.
    pub fn fill(&mut self, buf: &mut [u8]) {
        self.reader.read(buf);
    }
}

impl Debug for Drng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drng").finish_non_exhaustive()
    }
}
