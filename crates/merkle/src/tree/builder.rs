//! Bottom-up tree construction
//!
//! The tree is reduced level by level. Within a level, consecutive pairs are
//! combined into their parent; a level with an odd number of entries pairs its
//! last entry with itself. Levels are stored without that duplicate, so the
//! stored width of level `k + 1` is `ceil(len(k) / 2)`.
//!
//! ```text
//!   level 2:            root
//!                    /        \
//!   level 1:      h01           h22
//!                /   \         /   \
//!   level 0:   h0     h1     h2    (h2)
//! ```

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{MerkleTree, TreeOptions, combine};
use crate::digest::Digest;
use crate::error::Result;
use crate::hasher::{HashFunction, Keccak256};
use crate::tree::leaf::LeafSet;

/// Minimum number of pairs in a level before combination is handed to rayon
#[cfg(feature = "parallel")]
const PARALLEL_MIN_PAIRS: usize = 256;

/// Builds an immutable [`MerkleTree`] from values or pre-hashed leaves.
///
/// ```
/// use allowlist_merkle::{Keccak256, TreeBuilder};
///
/// let tree = TreeBuilder::new(Keccak256)
///     .sort_pairs(true)
///     .build(["test1@gmail.com", "test2@gmail.com", "test3@gmail.com"])
///     .unwrap();
///
/// assert_eq!(tree.leaf_count(), 3);
/// assert_eq!(tree.depth(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder<H = Keccak256> {
    hasher: H,
    options: TreeOptions,
}

impl<H: HashFunction> TreeBuilder<H> {
    /// Create a builder using `hasher` with default options
    pub fn new(hasher: H) -> Self {
        Self {
            hasher,
            options: TreeOptions::default(),
        }
    }

    /// Replace all options
    #[must_use]
    pub const fn with_options(mut self, options: TreeOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the sort-pairs policy
    #[must_use]
    pub const fn sort_pairs(mut self, sort_pairs: bool) -> Self {
        self.options.sort_pairs = sort_pairs;
        self
    }

    /// Options the tree will be built with
    pub const fn options(&self) -> &TreeOptions {
        &self.options
    }

    /// Hash `values` into leaves and build the tree over them
    pub fn build<I, V>(self, values: I) -> Result<MerkleTree<H>>
    where
        I: IntoIterator<Item = V>,
        V: AsRef<[u8]> + Sync,
    {
        let leaves = LeafSet::from_values(&self.hasher, values)?;
        Ok(self.build_from_leaves(leaves))
    }

    /// Build the tree over leaves that are already hashed
    pub fn build_from_leaves(self, leaves: LeafSet) -> MerkleTree<H> {
        let levels = build_levels(
            &self.hasher,
            self.options.sort_pairs,
            leaves.into_digests(),
        );
        let tree = MerkleTree {
            hasher: self.hasher,
            options: self.options,
            levels,
        };

        debug!(
            "built merkle tree: leaves={} depth={} sort_pairs={} root={}",
            tree.leaf_count(),
            tree.depth(),
            tree.options.sort_pairs,
            tree.root()
        );

        tree
    }
}

/// Reduce `leaves` to a single root, keeping every intermediate level
pub(crate) fn build_levels<H: HashFunction + ?Sized>(
    hasher: &H,
    sort_pairs: bool,
    leaves: Vec<Digest>,
) -> Vec<Vec<Digest>> {
    debug_assert!(!leaves.is_empty());

    let capacity = leaves.len().next_power_of_two().trailing_zeros() as usize + 1;
    let mut levels = Vec::with_capacity(capacity);
    levels.push(leaves);

    while let Some(level) = levels.last().filter(|level| level.len() > 1) {
        let parents = next_level(hasher, sort_pairs, level);
        levels.push(parents);
    }

    levels
}

/// Combine consecutive pairs of `level`, pairing an odd tail with itself
fn next_level<H: HashFunction + ?Sized>(
    hasher: &H,
    sort_pairs: bool,
    level: &[Digest],
) -> Vec<Digest> {
    let pairs = level.len().div_ceil(2);
    let parent = |i: usize| {
        let left = &level[2 * i];
        let right = level.get(2 * i + 1).unwrap_or(left);
        combine(hasher, sort_pairs, left, right)
    };

    #[cfg(feature = "parallel")]
    {
        if pairs >= PARALLEL_MIN_PAIRS {
            return (0..pairs).into_par_iter().map(parent).collect();
        }
    }

    (0..pairs).map(parent).collect()
}
