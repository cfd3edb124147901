//! BIP39 mnemonic phrase support.
//!
//! Provides the entropy-to-words encoding with its embedded checksum, word
//! and checksum validation, and PBKDF2 stretching of a phrase plus optional
//! passphrase into the 64-byte [`Seed`] which roots a BIP32 hierarchy.

mod bits;
mod language;
mod phrase;
mod seed;

pub use self::{
    language::Language,
    phrase::{Phrase, WORD_COUNTS},
    seed::Seed,
};

pub(crate) use self::phrase::entropy_len;
