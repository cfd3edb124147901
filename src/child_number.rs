//! Child numbers

use crate::{Error, Result};
use core::fmt::{self, Display};
use core::str::FromStr;

/// Hardened child keys use indices 2^31 through 2^32-1.
pub(crate) const HARDENED_FLAG: u32 = 1 << 31;

/// Index of a particular child key for a given (extended) private key.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct ChildNumber(pub u32);

impl ChildNumber {
    /// Hardened child number from an index below 2^31.
    pub fn hardened(index: u32) -> Result<Self> {
        if index & HARDENED_FLAG == 0 {
            Ok(ChildNumber(index | HARDENED_FLAG))
        } else {
            Err(Error::Decode)
        }
    }

    /// Is this child number within the hardened range?
    pub fn is_hardened(&self) -> bool {
        self.0 & HARDENED_FLAG != 0
    }

    /// Index with the hardened flag stripped.
    pub fn index(&self) -> u32 {
        self.0 & !HARDENED_FLAG
    }

    /// Next child number in the same (hardened or non-hardened) half-range.
    ///
    /// Used to retry after an invalid-child derivation failure; crossing
    /// into the other half-range would silently change the derivation kind.
    pub fn next(self) -> Result<Self> {
        let next = self.0.checked_add(1).ok_or(Error::Decode)?;
        if ChildNumber(next).is_hardened() == self.is_hardened() {
            Ok(ChildNumber(next))
        } else {
            Err(Error::Decode)
        }
    }

    /// Serialize this child number as bytes.
    pub fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl From<u32> for ChildNumber {
    fn from(n: u32) -> ChildNumber {
        ChildNumber(n)
    }
}

impl From<ChildNumber> for u32 {
    fn from(n: ChildNumber) -> u32 {
        n.0
    }
}

impl FromStr for ChildNumber {
    type Err = Error;

    fn from_str(child: &str) -> Result<ChildNumber> {
        // BIP-44 allows `'`, `h`, or `H` to mark hardened segments
        let (child, mask) = match child.strip_suffix(&['\'', 'h', 'H'][..]) {
            Some(c) => (c, HARDENED_FLAG),
            None => (child, 0),
        };

        if child.is_empty() || !child.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::Decode);
        }

        let index = child.parse::<u32>().map_err(|_| Error::Decode)?;

        if index & HARDENED_FLAG == 0 {
            Ok(ChildNumber(index | mask))
        } else {
            Err(Error::Decode)
        }
    }
}

impl Display for ChildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())?;

        if self.is_hardened() {
            write!(f, "'")?;
        }

        Ok(())
    }
}
