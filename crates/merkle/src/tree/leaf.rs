//! Leaf set construction
//!
//! Each input value is hashed independently into a leaf digest. On targets with
//! the `parallel` feature the hashing is spread over the rayon pool and the
//! results are gathered back in input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::digest::Digest;
use crate::error::{MerkleError, Result};
use crate::hasher::HashFunction;

/// Minimum number of values before leaf hashing is handed to rayon
#[cfg(feature = "parallel")]
const PARALLEL_MIN_LEAVES: usize = 512;

/// A leaf of the tree together with its position in the input
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Leaf {
    /// Position of the source value in the input order
    pub index: usize,
    /// Hash of the source value
    pub digest: Digest,
}

/// The ordered, non-empty collection of leaf digests a tree is built over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafSet {
    digests: Vec<Digest>,
}

impl LeafSet {
    /// Hash every value with `hasher`, preserving input order.
    ///
    /// Duplicate values are allowed and produce duplicate leaves.
    pub fn from_values<H, I, V>(hasher: &H, values: I) -> Result<Self>
    where
        H: HashFunction + ?Sized,
        I: IntoIterator<Item = V>,
        V: AsRef<[u8]> + Sync,
    {
        let values: Vec<V> = values.into_iter().collect();
        if values.is_empty() {
            return Err(MerkleError::EmptyInput);
        }

        #[cfg(feature = "parallel")]
        let digests: Vec<Digest> = if values.len() >= PARALLEL_MIN_LEAVES {
            values
                .par_iter()
                .map(|value| hasher.hash(value.as_ref()))
                .collect()
        } else {
            values
                .iter()
                .map(|value| hasher.hash(value.as_ref()))
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let digests: Vec<Digest> = values
            .iter()
            .map(|value| hasher.hash(value.as_ref()))
            .collect();

        Ok(Self { digests })
    }

    /// Use already hashed leaves as they are
    pub fn from_digests<I: IntoIterator<Item = Digest>>(digests: I) -> Result<Self> {
        let digests: Vec<Digest> = digests.into_iter().collect();
        if digests.is_empty() {
            return Err(MerkleError::EmptyInput);
        }
        Ok(Self { digests })
    }

    /// Number of leaves
    pub fn len(&self) -> usize {
        self.digests.len()
    }

    /// Always `false`: a leaf set cannot be constructed empty
    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }

    /// Leaf at `index`, if any
    pub fn get(&self, index: usize) -> Option<Leaf> {
        self.digests.get(index).map(|digest| Leaf {
            index,
            digest: digest.clone(),
        })
    }

    /// Position of the first leaf equal to `digest`
    pub fn position(&self, digest: &Digest) -> Option<usize> {
        self.digests.iter().position(|d| d == digest)
    }

    /// Leaves in input order
    pub fn iter(&self) -> impl Iterator<Item = Leaf> + '_ {
        self.digests
            .iter()
            .enumerate()
            .map(|(index, digest)| Leaf {
                index,
                digest: digest.clone(),
            })
    }

    /// Leaf digests in input order
    pub fn digests(&self) -> &[Digest] {
        &self.digests
    }

    pub(crate) fn into_digests(self) -> Vec<Digest> {
        self.digests
    }
}
