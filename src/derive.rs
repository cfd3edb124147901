//! BIP32 key derivation engine.
//!
//! Implements master key generation from seed material, the CKDpriv and
//! CKDpub child derivation functions, neutering, fingerprints, and the
//! path-walking policy which decides how a public key at the end of a path
//! is reached.

use crate::{
    ChildNumber, DerivationPath, Error, ExtendedKey, HmacSha512, KeyFingerprint, Result, Version,
    KEY_SIZE,
};
use core::convert::TryInto;
use core::mem;
use hmac::Mac;
use k256::elliptic_curve::{group::prime::PrimeCurveAffine, sec1::ToEncodedPoint, PrimeField};
use k256::{AffinePoint, FieldBytes, NonZeroScalar, PublicKey, Scalar, SecretKey};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Derivation domain separator for BIP39 keys.
const BIP39_DOMAIN_SEPARATOR: [u8; 12] = [
    0x42, 0x69, 0x74, 0x63, 0x6f, 0x69, 0x6e, 0x20, 0x73, 0x65, 0x65, 0x64,
];

impl ExtendedKey {
    /// Create the root extended key for the given seed value.
    ///
    /// Accepts between 16 and 64 bytes of seed material (128 to 512 bits
    /// per BIP32). Fails with [`Error::InvalidKey`] in the vanishingly
    /// unlikely case the seed maps outside the secp256k1 scalar range.
    pub fn master_from_seed(seed: &[u8], mainnet: bool, private: bool) -> Result<Self> {
        if !(16..=64).contains(&seed.len()) {
            return Err(Error::SeedLength);
        }

        let mut hmac = HmacSha512::new_from_slice(&BIP39_DOMAIN_SEPARATOR)?;
        hmac.update(seed);

        let result = hmac.finalize().into_bytes();
        let (secret_bytes, chain_code) = result.split_at(KEY_SIZE);
        let secret = SecretKey::from_slice(secret_bytes).map_err(|_| Error::InvalidKey)?;

        let mut key_bytes = [0u8; KEY_SIZE + 1];
        if private {
            key_bytes[1..].copy_from_slice(&secret.to_bytes());
        } else {
            key_bytes = compress(&secret.public_key());
        }

        Self::new(
            Version::from_parts(mainnet, private),
            0,
            KeyFingerprint::default(),
            ChildNumber::default(),
            chain_code.try_into()?,
            key_bytes,
        )
    }

    /// Derive a private child key for a particular [`ChildNumber`]
    /// (`CKDpriv` in BIP32).
    ///
    /// [`Error::InvalidChild`] signals the degenerate HMAC case; the caller
    /// retries with the next index ([`DerivationPath`] walks do this
    /// automatically).
    pub fn derive_private(&self, child_number: ChildNumber) -> Result<Self> {
        let depth = self.depth().checked_add(1).ok_or(Error::Depth)?;
        let secret = self.secret_key()?;

        let mut hmac = HmacSha512::new_from_slice(self.chain_code())?;

        if child_number.is_hardened() {
            hmac.update(self.key_bytes());
        } else {
            hmac.update(&compress(&secret.public_key()));
        }

        hmac.update(&child_number.to_bytes());

        let result = hmac.finalize().into_bytes();
        let (tweak, chain_code) = result.split_at(KEY_SIZE);

        let tweak_scalar = Option::<Scalar>::from(Scalar::from_repr(*FieldBytes::from_slice(
            tweak,
        )))
        .ok_or(Error::InvalidChild)?;

        let child_scalar = tweak_scalar + secret.to_nonzero_scalar().as_ref();
        let child_secret: SecretKey = Option::<NonZeroScalar>::from(NonZeroScalar::new(
            child_scalar,
        ))
        .map(Into::into)
        .ok_or(Error::InvalidChild)?;

        let mut key_bytes = [0u8; KEY_SIZE + 1];
        key_bytes[1..].copy_from_slice(&child_secret.to_bytes());

        Self::new(
            self.version(),
            depth,
            self.fingerprint()?,
            child_number,
            chain_code.try_into()?,
            key_bytes,
        )
    }

    /// Derive a public child key for a particular [`ChildNumber`]
    /// (`CKDpub` in BIP32).
    ///
    /// Hardened children cannot be derived from a public parent and yield
    /// [`Error::HardenedChild`]. A point-at-infinity result surfaces from
    /// the group backend as a constructor failure and is reported as
    /// [`Error::InvalidChild`], the same as an out-of-range tweak.
    pub fn derive_public(&self, child_number: ChildNumber) -> Result<Self> {
        if child_number.is_hardened() {
            return Err(Error::HardenedChild);
        }

        if !self.is_public() {
            return Err(Error::Crypto);
        }

        let depth = self.depth().checked_add(1).ok_or(Error::Depth)?;
        let parent_point =
            PublicKey::from_sec1_bytes(self.key_bytes()).map_err(|_| Error::Crypto)?;

        let mut hmac = HmacSha512::new_from_slice(self.chain_code())?;
        hmac.update(self.key_bytes());
        hmac.update(&child_number.to_bytes());

        let result = hmac.finalize().into_bytes();
        let (tweak, chain_code) = result.split_at(KEY_SIZE);

        let tweak_scalar = Option::<Scalar>::from(Scalar::from_repr(*FieldBytes::from_slice(
            tweak,
        )))
        .ok_or(Error::InvalidChild)?;

        let child_point = parent_point.to_projective() + (AffinePoint::generator() * tweak_scalar);
        let child_key =
            PublicKey::from_affine(child_point.to_affine()).map_err(|_| Error::InvalidChild)?;

        Self::new(
            self.version(),
            depth,
            self.fingerprint()?,
            child_number,
            chain_code.try_into()?,
            compress(&child_key),
        )
    }

    /// Neuter a private key into the public key of the same node (`N` in
    /// BIP32).
    ///
    /// This is a view change, not a derivation: depth, parent fingerprint,
    /// child number and chain code are preserved. Neutering a public key is
    /// the identity.
    pub fn neuter(&self) -> Result<Self> {
        if self.is_public() {
            return Ok(self.clone());
        }

        let secret = self.secret_key()?;

        Self::new(
            self.version().to_public(),
            self.depth(),
            self.parent_fingerprint(),
            self.child_number(),
            *self.chain_code(),
            compress(&secret.public_key()),
        )
    }

    /// Derive the key at `path`, private or public.
    ///
    /// Private targets walk `CKDpriv` at every step. Public targets also
    /// walk the private chain (hardened segments may appear anywhere), then
    /// reach the final node publicly: a hardened final segment is neutered
    /// in place, a non-hardened one is re-derived with `CKDpub` from the
    /// grandparent's neutered key so the public derivation arithmetic is
    /// exercised.
    ///
    /// Any [`Error::InvalidChild`] along the walk advances that child index
    /// by one and retries, per BIP32.
    pub fn derive_path(&self, path: &DerivationPath, private: bool) -> Result<Self> {
        if path.is_empty() {
            return if private {
                self.secret_key().map(|_| self.clone())
            } else {
                self.neuter()
            };
        }

        if !self.is_private() {
            return Err(Error::Crypto);
        }

        let mut grandparent = None;
        let mut node = self.clone();

        for child_number in path.iter() {
            let child = retry_invalid_child(child_number, |n| node.derive_private(n))?;
            grandparent = Some(mem::replace(&mut node, child));
        }

        if private {
            return Ok(node);
        }

        if node.child_number().is_hardened() {
            node.neuter()
        } else {
            let parent = grandparent.ok_or(Error::Crypto)?.neuter()?;
            retry_invalid_child(node.child_number(), |n| parent.derive_public(n))
        }
    }

    /// Compute the 4-byte key fingerprint for this key:
    /// `RIPEMD160(SHA256(compressed_public_key))[..4]`.
    pub fn fingerprint(&self) -> Result<KeyFingerprint> {
        let compressed = if self.is_private() {
            compress(&self.secret_key()?.public_key())
        } else {
            *self.key_bytes()
        };

        let digest = Ripemd160::digest(Sha256::digest(compressed));
        Ok(digest[..4].try_into()?)
    }
}

/// Retry a child derivation on [`Error::InvalidChild`], advancing the index
/// within its half-range. Probability of a single retry is below 2^-127.
fn retry_invalid_child<F>(mut child_number: ChildNumber, mut derive: F) -> Result<ExtendedKey>
where
    F: FnMut(ChildNumber) -> Result<ExtendedKey>,
{
    loop {
        match derive(child_number) {
            Err(Error::InvalidChild) => child_number = child_number.next()?,
            result => return result,
        }
    }
}

/// SEC1 compressed encoding of a public key.
fn compress(public_key: &PublicKey) -> [u8; KEY_SIZE + 1] {
    public_key
        .to_encoded_point(true)
        .as_bytes()
        .try_into()
        .expect("malformed public key")
}
