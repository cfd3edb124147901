//! BIP85 deterministic child entropy.
//!
//! Any node of a BIP32 tree can serve as the root from which
//! application-specific secrets are derived: the path
//! `m/83696968'/<app>'/<params>'...` selects an [`Application`], the node at
//! that path is derived privately, and its scalar is stretched through
//! HMAC-SHA512 into 64 bytes of application entropy which the application's
//! formatter turns into a typed [`Output`].

mod application;
mod drng;

pub use self::{
    application::{Application, Output},
    drng::Drng,
};

use crate::{DerivationPath, Error, ExtendedKey, HmacSha512, Result};
use hmac::Mac;
use zeroize::Zeroizing;

/// The hardened purpose index (`83696968'`) leading every BIP85 path.
pub const PURPOSE: u32 = 83696968;

/// HMAC key turning a derived scalar into application entropy.
const HMAC_KEY: &[u8] = b"bip-entropy-from-k";

/// Derive the BIP85 output for `path` from a private master key.
pub fn derive(master: &ExtendedKey, path: &DerivationPath) -> Result<Output> {
    let application = Application::from_path(path)?;
    let entropy = derive_entropy(master, path)?;
    application.apply(&entropy, master.is_mainnet())
}

/// Derive the node at `path` and compute its 64 bytes of application
/// entropy.
///
/// The path must be shaped like a BIP85 path (purpose `83696968'`, at
/// least two further hardened segments) but the application code is not
/// interpreted, so callers can drive applications without formatters
/// (DRNG reads) or experimental codes.
pub fn derive_entropy(
    master: &ExtendedKey,
    path: &DerivationPath,
) -> Result<Zeroizing<[u8; 64]>> {
    validate_path(path)?;

    if !master.is_private() {
        return Err(Error::Crypto);
    }

    let node = master.derive_path(path, true)?;

    let mut hmac = HmacSha512::new_from_slice(HMAC_KEY)?;
    hmac.update(&node.key_bytes()[1..]);

    let mut entropy = Zeroizing::new([0u8; 64]);
    entropy.copy_from_slice(&hmac.finalize().into_bytes());
    Ok(entropy)
}

/// Check the BIP85 path shape: at least four segments in total, the purpose
/// first, and everything after `m` hardened.
fn validate_path(path: &DerivationPath) -> Result<()> {
    let segments = path.as_ref();

    if segments.len() < 3 || segments.iter().any(|c| !c.is_hardened()) {
        return Err(Error::Decode);
    }

    if segments[0].index() != PURPOSE {
        return Err(Error::Decode);
    }

    Ok(())
}
