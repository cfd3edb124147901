//! Error type.

use core::fmt::{self, Display};

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Base58 errors.
    Base58,

    /// Mnemonic checksum mismatch.
    Checksum,

    /// Cryptographic errors, including misuse of key visibility (e.g.
    /// private-only operations invoked on a public key).
    Crypto,

    /// Decoding errors: malformed extended keys, derivation paths or
    /// wordlist resources.
    Decode,

    /// Maximum derivation depth exceeded.
    Depth,

    /// Entropy length is not one of the sizes BIP-39 encodes.
    EntropyLength,

    /// Attempted to derive a hardened child of a public key.
    HardenedChild,

    /// The degenerate HMAC case of BIP-32 child derivation. Callers retry
    /// with the next child index; probability is below 2^-127.
    InvalidChild,

    /// Secret scalar outside the valid secp256k1 range.
    InvalidKey,

    /// Application code this crate does not (or deliberately will not)
    /// implement.
    NotImplemented,

    /// Application parameter outside its documented bounds.
    Range,

    /// DRNG seed material is not exactly 64 bytes.
    SeedLength,

    /// Unknown word for the selected wordlist.
    UnknownWord,

    /// Word count is not one of 12, 15, 18, 21 or 24.
    WordCount,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Base58 => f.write_str("base58 error"),
            Error::Checksum => f.write_str("mnemonic checksum mismatch"),
            Error::Crypto => f.write_str("cryptographic error"),
            Error::Decode => f.write_str("decoding error"),
            Error::Depth => f.write_str("maximum derivation depth exceeded"),
            Error::EntropyLength => f.write_str("invalid entropy length"),
            Error::HardenedChild => {
                f.write_str("cannot derive hardened child of a public key")
            }
            Error::InvalidChild => f.write_str("invalid child key, retry with next index"),
            Error::InvalidKey => f.write_str("secret scalar out of range"),
            Error::NotImplemented => f.write_str("unsupported application"),
            Error::Range => f.write_str("parameter out of range"),
            Error::SeedLength => f.write_str("seed must be exactly 64 bytes"),
            Error::UnknownWord => f.write_str("word not in the selected wordlist"),
            Error::WordCount => f.write_str("invalid mnemonic word count"),
        }
    }
}

impl std::error::Error for Error {}

impl From<bs58::decode::Error> for Error {
    fn from(_: bs58::decode::Error) -> Error {
        Error::Base58
    }
}

impl From<bs58::encode::Error> for Error {
    fn from(_: bs58::encode::Error) -> Error {
        Error::Base58
    }
}

impl From<core::array::TryFromSliceError> for Error {
    fn from(_: core::array::TryFromSliceError) -> Error {
        Error::Decode
    }
}

impl From<hmac::digest::InvalidLength> for Error {
    fn from(_: hmac::digest::InvalidLength) -> Error {
        Error::Crypto
    }
}

impl From<k256::elliptic_curve::Error> for Error {
    fn from(_: k256::elliptic_curve::Error) -> Error {
        Error::Crypto
    }
}
