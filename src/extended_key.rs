//! Extended key types (i.e. `xprv` and `xpub`)

use crate::{ChainCode, ChildNumber, Error, KeyFingerprint, Result, Version, KEY_SIZE};
use core::convert::{TryFrom, TryInto};
use core::fmt::{self, Debug, Display};
use core::str::FromStr;
use k256::SecretKey;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, Zeroizing};

/// Extended key: the 78-byte record which carries not just a key but enough
/// context (chain code, depth, parent fingerprint, child number) to keep
/// deriving.
///
/// A single type covers private and public keys on either network; the
/// [`Version`] tag plus the leading byte of the key material distinguish
/// them. Values are immutable after construction and every constructor
/// enforces the serialization invariants, so a held `ExtendedKey` is always
/// a valid one (unless it came from [`ExtendedKey::decode_unchecked`]).
#[derive(Clone)]
pub struct ExtendedKey {
    /// Network and visibility tag.
    version: Version,

    /// Depth in the key derivation hierarchy; root is 0.
    depth: u8,

    /// Fingerprint of the parent key (zero at the root).
    parent_fingerprint: KeyFingerprint,

    /// Child number this key was derived with (zero at the root).
    child_number: ChildNumber,

    /// Chain code.
    chain_code: ChainCode,

    /// Key material: `0x00 || scalar` for private keys, an SEC1 compressed
    /// point for public keys.
    key_bytes: [u8; KEY_SIZE + 1],
}

impl ExtendedKey {
    /// Size of an extended key when deserialized into bytes from Base58.
    pub const BYTE_SIZE: usize = 78;

    /// Length of a Base58Check-encoded extended key.
    pub const BASE58_SIZE: usize = 111;

    /// Create an extended key, enforcing every construction invariant.
    pub fn new(
        version: Version,
        depth: u8,
        parent_fingerprint: KeyFingerprint,
        child_number: ChildNumber,
        chain_code: ChainCode,
        key_bytes: [u8; KEY_SIZE + 1],
    ) -> Result<Self> {
        let key = ExtendedKey {
            version,
            depth,
            parent_fingerprint,
            child_number,
            chain_code,
            key_bytes,
        };
        key.validate()?;
        Ok(key)
    }

    /// Decode from Base58Check without semantic validation.
    ///
    /// Only the checksum and the 78-byte length are checked; version,
    /// scalar range and root-consistency rules are not. Exists so invalid
    /// fixtures can be examined; everything else should use [`FromStr`].
    pub fn decode_unchecked(base58: &str) -> Result<Self> {
        let (key, _) = Self::decode(base58)?;
        Ok(key)
    }

    /// Network and visibility tag.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Depth in the key derivation hierarchy.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Key fingerprint of this key's parent.
    pub fn parent_fingerprint(&self) -> KeyFingerprint {
        self.parent_fingerprint
    }

    /// Child number used to derive this key from its parent.
    pub fn child_number(&self) -> ChildNumber {
        self.child_number
    }

    /// Borrow the chain code.
    pub fn chain_code(&self) -> &ChainCode {
        &self.chain_code
    }

    /// Borrow the 33 bytes of key material.
    pub fn key_bytes(&self) -> &[u8; KEY_SIZE + 1] {
        &self.key_bytes
    }

    /// Does this key carry a private scalar?
    pub fn is_private(&self) -> bool {
        self.version.is_private()
    }

    /// Does this key carry a public point?
    pub fn is_public(&self) -> bool {
        self.version.is_public()
    }

    /// Is this a mainnet key?
    pub fn is_mainnet(&self) -> bool {
        self.version.is_mainnet()
    }

    /// Is this a testnet key?
    pub fn is_testnet(&self) -> bool {
        self.version.is_testnet()
    }

    /// Serialize as the 78-byte form.
    pub fn to_bytes(&self) -> [u8; Self::BYTE_SIZE] {
        let mut bytes = [0u8; Self::BYTE_SIZE];
        bytes[..4].copy_from_slice(&self.version.to_bytes());
        bytes[4] = self.depth;
        bytes[5..9].copy_from_slice(&self.parent_fingerprint);
        bytes[9..13].copy_from_slice(&self.child_number.to_bytes());
        bytes[13..45].copy_from_slice(&self.chain_code);
        bytes[45..].copy_from_slice(&self.key_bytes);
        bytes
    }

    /// Serialize as a self-[`Zeroizing`] Base58Check string.
    pub fn to_string_zeroizing(&self) -> Zeroizing<String> {
        let mut bytes = self.to_bytes();
        let encoded = Zeroizing::new(bs58::encode(&bytes).with_check().into_string());
        bytes.zeroize();
        debug_assert_eq!(encoded.len(), Self::BASE58_SIZE);
        encoded
    }

    /// The private scalar, for private keys only.
    pub(crate) fn secret_key(&self) -> Result<SecretKey> {
        if !self.is_private() {
            return Err(Error::Crypto);
        }
        SecretKey::from_slice(&self.key_bytes[1..]).map_err(|_| Error::InvalidKey)
    }

    /// Structural decode shared by the checked and unchecked entry points.
    fn decode(base58: &str) -> Result<(Self, &str)> {
        let mut bytes = [0u8; Self::BYTE_SIZE + 4]; // with 4-byte checksum
        let decoded_len = bs58::decode(base58).with_check(None).onto(&mut bytes)?;

        if decoded_len != Self::BYTE_SIZE {
            return Err(Error::Decode);
        }

        let version = Version::try_from(&bytes[..4])?;
        let depth = bytes[4];
        let parent_fingerprint = bytes[5..9].try_into()?;
        let child_number = ChildNumber(u32::from_be_bytes(bytes[9..13].try_into()?));
        let chain_code = bytes[13..45].try_into()?;
        let key_bytes = bytes[45..78].try_into()?;

        bytes.zeroize();

        let prefix = base58.get(..4).ok_or(Error::Decode)?;

        Ok((
            ExtendedKey {
                version,
                depth,
                parent_fingerprint,
                child_number,
                chain_code,
                key_bytes,
            },
            prefix,
        ))
    }

    /// Check every construction invariant of the 78-byte form.
    fn validate(&self) -> Result<()> {
        match self.key_bytes[0] {
            0x00 if self.is_private() => {
                self.secret_key()?;
            }
            0x02 | 0x03 if self.is_public() => (),
            _ => return Err(Error::Decode),
        }

        if self.depth == 0 {
            if self.parent_fingerprint != KeyFingerprint::default()
                || self.child_number != ChildNumber::default()
            {
                return Err(Error::Decode);
            }
        } else if self.parent_fingerprint == KeyFingerprint::default() {
            return Err(Error::Decode);
        }

        Ok(())
    }
}

impl Display for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_zeroizing())
    }
}

impl FromStr for ExtendedKey {
    type Err = Error;

    fn from_str(base58: &str) -> Result<Self> {
        let (key, prefix) = Self::decode(base58)?;

        if prefix != key.version.as_prefix() {
            return Err(Error::Decode);
        }

        key.validate()?;
        Ok(key)
    }
}

impl ConstantTimeEq for ExtendedKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        u32::from(self.version).ct_eq(&u32::from(other.version))
            & self.depth.ct_eq(&other.depth)
            & self.parent_fingerprint.ct_eq(&other.parent_fingerprint)
            & self.child_number.0.ct_eq(&other.child_number.0)
            & self.chain_code.ct_eq(&other.chain_code)
            & self.key_bytes.ct_eq(&other.key_bytes)
    }
}

/// NOTE: uses [`ConstantTimeEq`] internally
impl Eq for ExtendedKey {}

/// NOTE: uses [`ConstantTimeEq`] internally
impl PartialEq for ExtendedKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Debug for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedKey")
            .field("version", &self.version)
            .field("depth", &self.depth)
            .field("parent_fingerprint", &self.parent_fingerprint)
            .field("child_number", &self.child_number)
            .field("key_bytes", &"...")
            .finish()
    }
}

impl Zeroize for ExtendedKey {
    fn zeroize(&mut self) {
        self.chain_code.zeroize();
        self.key_bytes.zeroize();
    }
}

impl Drop for ExtendedKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}
