//! Digest type shared by leaves, internal nodes, proofs and roots
//!
//! A [`Digest`] is the fixed-length output of a [`HashFunction`]. Internally
//! digests are raw bytes; whenever one crosses a boundary (logs, proofs on the
//! wire, a published root) it is rendered as lowercase hexadecimal.
//!
//! ## Example Usage
//!
//! ```
//! use allowlist_merkle::{Digest, HashFunction, Keccak256};
//!
//! let digest = Keccak256.hash(b"test1@gmail.com");
//! let hex = digest.to_hex_prefixed();
//!
//! let decoded: Digest = hex.parse().unwrap();
//! assert_eq!(decoded, digest);
//! ```
//!
//! [`HashFunction`]: crate::HashFunction

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use alloy_primitives::{B256, hex};
use bytes::Bytes;

use crate::error::{MerkleError, Result};

/// Output of a hash function: an immutable byte string compared byte-wise.
///
/// Ordering is lexicographic over the raw bytes, which is the order used when
/// pairs are sorted before combination.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Digest(Bytes);

impl Digest {
    /// Creates a digest by copying the given bytes
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(bytes))
    }

    /// Decodes a digest from hex, with or without a `0x` prefix
    pub fn from_hex<T: AsRef<[u8]>>(input: T) -> Result<Self> {
        let bytes = hex::decode(input)?;
        Ok(Self(Bytes::from(bytes)))
    }

    /// Returns the underlying bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes in the digest
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if the digest has no bytes at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex without prefix
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Lowercase hex with a `0x` prefix
    pub fn to_hex_prefixed(&self) -> String {
        hex::encode_prefixed(&self.0)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex_prefixed())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = MerkleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Deref for Digest {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Vec<u8>> for Digest {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Bytes::from(bytes))
    }
}

impl From<&[u8]> for Digest {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl From<[u8; 32]> for Digest {
    fn from(bytes: [u8; 32]) -> Self {
        Self::from_slice(&bytes)
    }
}

impl From<B256> for Digest {
    fn from(value: B256) -> Self {
        Self::from_slice(value.as_slice())
    }
}

impl TryFrom<&Digest> for B256 {
    type Error = std::array::TryFromSliceError;

    fn try_from(digest: &Digest) -> std::result::Result<Self, Self::Error> {
        Self::try_from(digest.as_bytes())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Digest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex_prefixed())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Digest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip_with_and_without_prefix() {
        let digest = Digest::from(vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(digest.to_hex(), "deadbeef");
        assert_eq!(digest.to_hex_prefixed(), "0xdeadbeef");
        assert_eq!(format!("{digest:#x}"), "0xdeadbeef");

        assert_eq!(Digest::from_hex("deadbeef").unwrap(), digest);
        assert_eq!("0xdeadbeef".parse::<Digest>().unwrap(), digest);
    }

    #[test]
    fn test_invalid_hex_is_rejected() {
        assert!(matches!(
            Digest::from_hex("0xzz"),
            Err(MerkleError::InvalidHex(_))
        ));
        assert!(matches!(
            Digest::from_hex("abc"),
            Err(MerkleError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let a = Digest::from(vec![0x01, 0xff]);
        let b = Digest::from(vec![0x02, 0x00]);
        let c = Digest::from(vec![0x02, 0x00, 0x00]);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_b256_conversion() {
        let value = B256::repeat_byte(0x42);
        let digest = Digest::from(value);
        assert_eq!(digest.len(), 32);
        assert_eq!(B256::try_from(&digest).unwrap(), value);

        let short = Digest::from(vec![0u8; 4]);
        assert!(B256::try_from(&short).is_err());
    }
}
