//! Version support.

use crate::{Error, Result};
use core::convert::{TryFrom, TryInto};
use core::fmt::{self, Display};

/// BIP32 versions are the leading prefix of a Base58-encoded extended key
/// interpreted as a 32-bit big endian integer after decoding.
///
/// The version encodes both the network (mainnet vs testnet) and the
/// visibility (private vs public) of the key that follows it. Exactly four
/// versions are recognized.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Version {
    /// Mainnet public key.
    XPub,

    /// Mainnet private key.
    XPrv,

    /// Testnet public key.
    TPub,

    /// Testnet private key.
    TPrv,
}

impl Version {
    /// Is this a mainnet key?
    pub fn is_mainnet(self) -> bool {
        matches!(self, Version::XPub | Version::XPrv)
    }

    /// Is this a testnet key?
    pub fn is_testnet(self) -> bool {
        matches!(self, Version::TPub | Version::TPrv)
    }

    /// Is this a public key?
    pub fn is_public(self) -> bool {
        matches!(self, Version::XPub | Version::TPub)
    }

    /// Is this a private key?
    pub fn is_private(self) -> bool {
        matches!(self, Version::XPrv | Version::TPrv)
    }

    /// Version for the given network and visibility.
    pub fn from_parts(mainnet: bool, private: bool) -> Self {
        match (mainnet, private) {
            (true, true) => Version::XPrv,
            (true, false) => Version::XPub,
            (false, true) => Version::TPrv,
            (false, false) => Version::TPub,
        }
    }

    /// Version with the same network but public visibility.
    pub fn to_public(self) -> Self {
        Version::from_parts(self.is_mainnet(), false)
    }

    /// The four-character prefix this version produces in Base58 form.
    pub fn as_prefix(self) -> &'static str {
        match self {
            Version::XPub => "xpub",
            Version::XPrv => "xprv",
            Version::TPub => "tpub",
            Version::TPrv => "tprv",
        }
    }

    /// Serialize as the big endian byte prefix of an extended key.
    pub fn to_bytes(self) -> [u8; 4] {
        u32::from(self).to_be_bytes()
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_prefix())
    }
}

impl TryFrom<u32> for Version {
    type Error = Error;

    fn try_from(n: u32) -> Result<Version> {
        match n {
            // `xpub` (mainnet public)
            0x0488B21E => Ok(Version::XPub),
            // `xprv` (mainnet private)
            0x0488ADE4 => Ok(Version::XPrv),
            // `tpub` (testnet public)
            0x043587CF => Ok(Version::TPub),
            // `tprv` (testnet private)
            0x04358394 => Ok(Version::TPrv),
            _ => Err(Error::Decode),
        }
    }
}

impl From<Version> for u32 {
    fn from(v: Version) -> u32 {
        match v {
            Version::XPub => 0x0488B21E,
            Version::XPrv => 0x0488ADE4,
            Version::TPub => 0x043587CF,
            Version::TPrv => 0x04358394,
        }
    }
}

impl TryFrom<&[u8]> for Version {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Version> {
        u32::from_be_bytes(bytes.try_into()?).try_into()
    }
}
