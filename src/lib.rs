#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

//! # Usage
//!
//! Derive an extended key from a seed and walk a path:
//!
//! ```
//! use hdseed::{DerivationPath, ExtendedKey};
//!
//! # fn main() -> hdseed::Result<()> {
//! let seed = [0x42; 32];
//! let root = ExtendedKey::master_from_seed(&seed, true, true)?;
//!
//! let path: DerivationPath = "m/0'/1".parse()?;
//! let child = root.derive_path(&path, true)?;
//! assert_eq!(child.depth(), 2);
//! assert!(child.to_string().starts_with("xprv"));
//!
//! // the same node, seen publicly
//! let public = root.derive_path(&path, false)?;
//! assert_eq!(public, child.neuter()?);
//! # Ok(())
//! # }
//! ```
//!
//! Encode entropy as a mnemonic, stretch it into a seed, then pull a fresh
//! application secret back out of the tree with BIP85:
//!
//! ```
//! use hdseed::bip85::{self, Output};
//! use hdseed::mnemonic::{Language, Phrase};
//! use hdseed::ExtendedKey;
//!
//! # fn main() -> hdseed::Result<()> {
//! let phrase = Phrase::from_entropy(&[0x7f; 16], Language::English)?;
//! let seed = phrase.to_seed("");
//! let master = ExtendedKey::master_from_seed(seed.as_bytes(), true, true)?;
//!
//! match bip85::derive(&master, &"m/83696968'/39'/0'/12'/0'".parse()?)? {
//!     Output::Mnemonic(fresh) => assert_eq!(fresh.word_count(), 12),
//!     _ => unreachable!(),
//! }
//! # Ok(())
//! # }
//! ```

pub mod bip85;
pub mod mnemonic;

mod child_number;
mod derivation_path;
mod derive;
mod error;
mod extended_key;
mod version;

pub use crate::{
    child_number::ChildNumber,
    derivation_path::DerivationPath,
    error::{Error, Result},
    extended_key::ExtendedKey,
    version::Version,
};

/// Chain code: extension for both private and public keys which provides an
/// additional 256-bits of entropy.
pub type ChainCode = [u8; KEY_SIZE];

/// BIP32 key fingerprints.
pub type KeyFingerprint = [u8; 4];

/// HMAC with SHA-512
pub(crate) type HmacSha512 = hmac::Hmac<sha2::Sha512>;

/// Size of input key material and derived keys.
pub const KEY_SIZE: usize = 32;
