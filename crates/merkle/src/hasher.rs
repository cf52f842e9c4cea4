//! Hash functions used to derive leaves and internal nodes
//!
//! The tree never picks a hash algorithm on its own. Every component takes a
//! [`HashFunction`] explicitly, so the same code runs over keccak-256 (the
//! default, see [`Keccak256`]), any RustCrypto digest via [`DigestHasher`], or a
//! trivial stub in tests.

use std::fmt;
use std::marker::PhantomData;

use alloy_primitives::Keccak256 as KeccakState;

use crate::digest::Digest;

/// Size in bytes of a keccak-256 digest
pub const KECCAK256_OUTPUT_LEN: usize = 32;

/// A deterministic hash function with a fixed-length output.
///
/// Implementations must be collision resistant for the tree to be sound; the
/// tree itself only relies on determinism and the fixed output length.
pub trait HashFunction: Send + Sync {
    /// Length in bytes of every digest this function produces
    fn output_len(&self) -> usize;

    /// Hash the concatenation of `parts` without materializing it
    fn hash_parts(&self, parts: &[&[u8]]) -> Digest;

    /// Hash a single byte string
    fn hash(&self, data: &[u8]) -> Digest {
        self.hash_parts(&[data])
    }
}

impl<H: HashFunction + ?Sized> HashFunction for &H {
    #[inline]
    fn output_len(&self) -> usize {
        (**self).output_len()
    }

    #[inline]
    fn hash_parts(&self, parts: &[&[u8]]) -> Digest {
        (**self).hash_parts(parts)
    }
}

/// Keccak-256, the hash used by Ethereum allowlists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keccak256;

impl HashFunction for Keccak256 {
    #[inline(always)]
    fn output_len(&self) -> usize {
        KECCAK256_OUTPUT_LEN
    }

    #[inline]
    fn hash_parts(&self, parts: &[&[u8]]) -> Digest {
        let mut hasher = KeccakState::new();
        for part in parts {
            hasher.update(part);
        }
        Digest::from(hasher.finalize())
    }
}

/// Adapter exposing any [`digest::Digest`] implementation as a [`HashFunction`]
///
/// ```
/// use allowlist_merkle::{DigestHasher, HashFunction};
///
/// let sha256 = DigestHasher::<sha2::Sha256>::new();
/// assert_eq!(sha256.output_len(), 32);
/// ```
pub struct DigestHasher<D> {
    _digest: PhantomData<fn() -> D>,
}

impl<D> DigestHasher<D> {
    /// Create a new adapter for `D`
    #[inline]
    pub const fn new() -> Self {
        Self {
            _digest: PhantomData,
        }
    }
}

impl<D> Default for DigestHasher<D> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for DigestHasher<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for DigestHasher<D> {}

impl<D> fmt::Debug for DigestHasher<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestHasher")
            .field("algorithm", &std::any::type_name::<D>())
            .finish()
    }
}

impl<D: digest::Digest> HashFunction for DigestHasher<D> {
    #[inline(always)]
    fn output_len(&self) -> usize {
        <D as digest::Digest>::output_size()
    }

    #[inline]
    fn hash_parts(&self, parts: &[&[u8]]) -> Digest {
        let mut hasher = D::new();
        for part in parts {
            digest::Digest::update(&mut hasher, part);
        }
        Digest::from_slice(digest::Digest::finalize(hasher).as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::hex;

    #[test]
    fn test_keccak_known_vectors() {
        assert_eq!(
            Keccak256.hash(b"").to_hex(),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
        assert_eq!(
            Keccak256.hash(b"test1@gmail.com").to_hex(),
            "231e1a4d644b6760a8d51cae313e8a78c35e4783bfaf5225712734939387d148"
        );
    }

    #[test]
    fn test_hash_parts_matches_concatenation() {
        let joined = Keccak256.hash(b"hello world");
        let parts = Keccak256.hash_parts(&[
            b"hello".as_slice(),
            b" ".as_slice(),
            b"world".as_slice(),
        ]);
        assert_eq!(joined, parts);

        let sha = DigestHasher::<sha2::Sha256>::new();
        assert_eq!(
            sha.hash(b"hello world"),
            sha.hash_parts(&[b"hello ".as_slice(), b"world".as_slice()])
        );
    }

    #[test]
    fn test_digest_adapter_sha256() {
        let sha = DigestHasher::<sha2::Sha256>::new();
        assert_eq!(sha.output_len(), 32);
        assert_eq!(
            sha.hash(b"abc").as_bytes(),
            hex::decode("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
                .unwrap()
                .as_slice()
        );
    }
}
