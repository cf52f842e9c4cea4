//! Combination policy shared by construction and verification

use std::fmt;
use std::str::FromStr;

use crate::digest::Digest;
use crate::error::MerkleError;
use crate::hasher::HashFunction;

/// Policy flags fixed at construction time.
///
/// The same options must be used when verifying proofs against the root of a
/// tree; they are not encoded in the proof itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TreeOptions {
    /// Order each pair of digests by byte value before hashing.
    ///
    /// When enabled, a parent hash does not depend on which child is on the
    /// left and proofs carry no position tags. When disabled, pairs are
    /// hashed in positional order and every proof step records its side.
    pub sort_pairs: bool,
}

impl TreeOptions {
    /// Options with sorted pairs, the default
    pub const SORTED: Self = Self { sort_pairs: true };

    /// Options with positional (left || right) pairs
    pub const POSITIONAL: Self = Self { sort_pairs: false };

    /// Set the sort-pairs policy
    #[must_use]
    pub const fn with_sort_pairs(mut self, sort_pairs: bool) -> Self {
        self.sort_pairs = sort_pairs;
        self
    }
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self::SORTED
    }
}

/// Position of a sibling relative to the node being proven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    /// The sibling is hashed first
    Left,
    /// The sibling is hashed second
    Right,
}

impl Side {
    /// Side of the sibling for a node at `index` within its level
    #[inline(always)]
    pub const fn of_sibling(index: usize) -> Self {
        match index & 1 {
            0 => Self::Right,
            _ => Self::Left,
        }
    }

    /// Returns the tag used in text encodings
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = MerkleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            other => Err(MerkleError::malformed_proof(
                0,
                format!("unknown side tag `{other}`"),
            )),
        }
    }
}

/// Combine two sibling digests into their parent.
///
/// With `sort_pairs` the result is `H(min(a, b) || max(a, b))` and therefore
/// symmetric in its arguments; otherwise it is `H(a || b)`.
#[inline]
pub fn combine<H: HashFunction + ?Sized>(
    hasher: &H,
    sort_pairs: bool,
    a: &Digest,
    b: &Digest,
) -> Digest {
    let (left, right) = if sort_pairs && b < a { (b, a) } else { (a, b) };
    hasher.hash_parts(&[left.as_bytes(), right.as_bytes()])
}
