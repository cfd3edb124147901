//! BIP85 applications and their output formatters.

use super::drng::Drng;
use super::PURPOSE;
use crate::mnemonic::{entropy_len, Language, Phrase};
use crate::{ChildNumber, DerivationPath, Error, ExtendedKey, Result, Version, KEY_SIZE};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use core::convert::TryInto;
use zeroize::Zeroizing;

/// The RFC 1924 85-character alphabet.
const BASE85_ALPHABET: &[u8; 85] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~";

/// A BIP85 application, parsed from the path segments following the
/// `83696968'` purpose, carrying its typed parameters.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Application {
    /// `39'`: a fresh mnemonic phrase.
    Mnemonic {
        /// Language of the output wordlist.
        language: Language,
        /// Number of words to produce.
        word_count: usize,
    },

    /// `2'`: a WIF-encoded private key.
    Wif,

    /// `32'`: a fresh extended private key.
    Xprv,

    /// `128169'`: raw entropy rendered as hex.
    Hex {
        /// Number of entropy bytes to emit, 16 to 64.
        num_bytes: usize,
    },

    /// `707764'`: a Base64 password.
    Base64 {
        /// Password length in characters, 20 to 86.
        length: usize,
    },

    /// `707785'`: a Base85 password.
    Base85 {
        /// Password length in characters, 10 to 80.
        length: usize,
    },

    /// `89101'`: uniform dice rolls.
    Dice {
        /// Number of die faces, at least 2.
        sides: u32,
        /// Number of rolls to emit, at least 1.
        rolls: u32,
    },

    /// `0'`: the raw deterministic byte stream. The only application with
    /// no formatter of its own; the caller reads arbitrary bytes.
    Drng,

    /// `828365'`: RSA key generation. Deliberately unimplemented.
    Rsa,
}

impl Application {
    /// Parse an application and its parameters from a full BIP85 path.
    ///
    /// The path must be at least `m/83696968'/<app>'/<param>'` with every
    /// segment hardened.
    pub fn from_path(path: &DerivationPath) -> Result<Self> {
        super::validate_path(path)?;

        let segments = path.as_ref();
        let params: Vec<u32> = segments[2..].iter().map(ChildNumber::index).collect();

        match segments[1].index() {
            39 => Ok(Application::Mnemonic {
                language: Language::from_bip85_index(*params.first().ok_or(Error::Range)?)
                    .ok_or(Error::Range)?,
                word_count: *params.get(1).ok_or(Error::Range)? as usize,
            }),
            2 => Ok(Application::Wif),
            32 => Ok(Application::Xprv),
            128169 => Ok(Application::Hex {
                num_bytes: *params.first().ok_or(Error::Range)? as usize,
            }),
            707764 => Ok(Application::Base64 {
                length: *params.first().ok_or(Error::Range)? as usize,
            }),
            707785 => Ok(Application::Base85 {
                length: *params.first().ok_or(Error::Range)? as usize,
            }),
            89101 => Ok(Application::Dice {
                sides: *params.first().ok_or(Error::Range)?,
                rolls: *params.get(1).ok_or(Error::Range)?,
            }),
            0 => Ok(Application::Drng),
            828365 => Ok(Application::Rsa),
            _ => Err(Error::NotImplemented),
        }
    }

    /// Format 64 bytes of application entropy into this application's
    /// output. `mainnet` selects the WIF prefix; the xprv application is
    /// always mainnet.
    pub fn apply(&self, entropy: &[u8; 64], mainnet: bool) -> Result<Output> {
        match *self {
            Application::Mnemonic {
                language,
                word_count,
            } => {
                let trimmed = &entropy[..entropy_len(word_count)?];
                Ok(Output::Mnemonic(Phrase::from_entropy(trimmed, language)?))
            }

            Application::Wif => {
                let mut payload = Zeroizing::new(Vec::with_capacity(KEY_SIZE + 2));
                payload.push(if mainnet { 0x80 } else { 0xEF });
                payload.extend_from_slice(&entropy[..KEY_SIZE]);
                // compression suffix: BIP32 keys pair with compressed points
                payload.push(0x01);

                Ok(Output::Wif(
                    bs58::encode(payload.as_slice()).with_check().into_string(),
                ))
            }

            Application::Xprv => {
                let mut key_bytes = [0u8; KEY_SIZE + 1];
                key_bytes[1..].copy_from_slice(&entropy[KEY_SIZE..]);

                Ok(Output::Xprv(ExtendedKey::new(
                    Version::XPrv,
                    0,
                    Default::default(),
                    Default::default(),
                    entropy[..KEY_SIZE].try_into()?,
                    key_bytes,
                )?))
            }

            Application::Hex { num_bytes } => {
                if !(16..=64).contains(&num_bytes) {
                    return Err(Error::Range);
                }
                Ok(Output::Hex(hex::encode(&entropy[..num_bytes])))
            }

            Application::Base64 { length } => {
                if !(20..=86).contains(&length) {
                    return Err(Error::Range);
                }
                let mut password = BASE64.encode(entropy);
                password.truncate(length);
                Ok(Output::Base64(password))
            }

            Application::Base85 { length } => {
                if !(10..=80).contains(&length) {
                    return Err(Error::Range);
                }
                let mut password = base85_encode(entropy);
                password.truncate(length);
                Ok(Output::Base85(password))
            }

            Application::Dice { sides, rolls } => {
                if sides < 2 || rolls < 1 {
                    return Err(Error::Range);
                }
                Ok(Output::Dice(dice_rolls(Drng::new(entropy)?, sides, rolls)))
            }

            Application::Drng => Ok(Output::Drng(Drng::new(entropy)?)),

            Application::Rsa => Err(Error::NotImplemented),
        }
    }

    /// The path segments (after `m`) selecting this application with the
    /// given child index, e.g. for building request paths.
    pub fn to_path(&self, index: u32) -> Result<DerivationPath> {
        let mut segments = vec![ChildNumber::hardened(PURPOSE)?];

        match *self {
            Application::Mnemonic {
                language,
                word_count,
            } => {
                segments.push(ChildNumber::hardened(39)?);
                segments.push(ChildNumber::hardened(language.bip85_index())?);
                segments.push(ChildNumber::hardened(word_count as u32)?);
            }
            Application::Wif => segments.push(ChildNumber::hardened(2)?),
            Application::Xprv => segments.push(ChildNumber::hardened(32)?),
            Application::Hex { num_bytes } => {
                segments.push(ChildNumber::hardened(128169)?);
                segments.push(ChildNumber::hardened(num_bytes as u32)?);
            }
            Application::Base64 { length } => {
                segments.push(ChildNumber::hardened(707764)?);
                segments.push(ChildNumber::hardened(length as u32)?);
            }
            Application::Base85 { length } => {
                segments.push(ChildNumber::hardened(707785)?);
                segments.push(ChildNumber::hardened(length as u32)?);
            }
            Application::Dice { sides, rolls } => {
                segments.push(ChildNumber::hardened(89101)?);
                segments.push(ChildNumber::hardened(sides)?);
                segments.push(ChildNumber::hardened(rolls)?);
            }
            Application::Drng => segments.push(ChildNumber::hardened(0)?),
            Application::Rsa => return Err(Error::NotImplemented),
        }

        segments.push(ChildNumber::hardened(index)?);
        Ok(segments.into())
    }
}

/// A formatted BIP85 output.
#[derive(Debug)]
pub enum Output {
    /// Fresh mnemonic phrase.
    Mnemonic(Phrase),

    /// WIF-encoded private key.
    Wif(String),

    /// Fresh extended private key.
    Xprv(ExtendedKey),

    /// Hex-encoded entropy.
    Hex(String),

    /// Base64 password.
    Base64(String),

    /// Base85 password.
    Base85(String),

    /// Comma-separated dice rolls.
    Dice(String),

    /// Deterministic byte stream, ready to read.
    Drng(Drng),
}

/// Produce `rolls` uniform rolls in `[0, sides)` by rejection sampling the
/// stream: each candidate is the top `ceil(log2(sides))` bits of a
/// `ceil(bits / 8)`-byte read, and candidates >= `sides` are discarded.
fn dice_rolls(mut drng: Drng, sides: u32, rolls: u32) -> String {
    let bits = u32::BITS - (sides - 1).leading_zeros();
    let bytes = ((bits + 7) / 8) as usize;
    let width = (sides - 1).to_string().len();

    let mut out: Vec<String> = Vec::with_capacity(rolls as usize);
    while out.len() < rolls as usize {
        let mut value = 0u32;
        for byte in drng.read(bytes) {
            value = (value << 8) | u32::from(byte);
        }

        let candidate = value >> (bytes as u32 * 8 - bits);
        if candidate < sides {
            out.push(format!("{:0width$}", candidate, width = width));
        }
    }

    out.join(",")
}

/// RFC 1924 Base85, matching Python's `base64.b85encode`.
fn base85_encode(data: &[u8]) -> String {
    let mut out = String::with_capacity((data.len() + 3) / 4 * 5);

    for chunk in data.chunks(4) {
        let mut group = [0u8; 4];
        group[..chunk.len()].copy_from_slice(chunk);

        let mut value = u32::from_be_bytes(group);
        let mut encoded = [0u8; 5];
        for slot in encoded.iter_mut().rev() {
            *slot = BASE85_ALPHABET[(value % 85) as usize];
            value /= 85;
        }

        for &c in &encoded[..chunk.len() + 1] {
            out.push(c as char);
        }
    }

    out
}
