//! Binary Merkle tree over a fixed set of values.
//!
//! This module builds a tree from leaf digests, generates membership proofs
//! for individual leaves and verifies those proofs against a published root.
//!
//! The tree is stored as a flat arena of levels, leaf level first, root level
//! last. Parent and child positions are computed arithmetically: the parent of
//! `(level, i)` is `(level + 1, i / 2)` and its children are
//! `(level - 1, 2i)` and `(level - 1, 2i + 1)`, the latter falling back to
//! `2i` when a level has an odd width.

mod builder;
mod display;
mod leaf;
mod options;
mod proof;
mod verify;

pub use builder::TreeBuilder;
pub use leaf::{Leaf, LeafSet};
pub use options::{Side, TreeOptions, combine};
pub use proof::{Proof, ProofStep};
pub use verify::Verifier;

use crate::digest::Digest;
use crate::error::{MerkleError, Result};
use crate::hasher::{HashFunction, Keccak256};

/// A node of the tree, materialized on demand from the level arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A leaf at level 0
    Leaf(Leaf),
    /// An internal node holding the digests of its two children
    Internal {
        /// Digest of this node
        digest: Digest,
        /// Digest of the left child
        left: Digest,
        /// Digest of the right child; equal to `left` for an odd tail
        right: Digest,
    },
}

impl Node {
    /// Digest of this node
    pub const fn digest(&self) -> &Digest {
        match self {
            Self::Leaf(leaf) => &leaf.digest,
            Self::Internal { digest, .. } => digest,
        }
    }
}

/// An immutable binary Merkle tree.
///
/// Built once through [`TreeBuilder`]; there is no way to add, update or
/// remove leaves afterwards. The tree keeps the hash function and options it
/// was built with so proofs can be checked with [`MerkleTree::verify`].
#[derive(Debug, Clone)]
pub struct MerkleTree<H = Keccak256> {
    hasher: H,
    options: TreeOptions,
    levels: Vec<Vec<Digest>>,
}

impl<H: HashFunction> MerkleTree<H> {
    /// The root digest
    pub fn root(&self) -> &Digest {
        // a tree always has at least one level holding exactly one root
        &self.levels[self.levels.len() - 1][0]
    }

    /// The root digest as `0x`-prefixed hex
    pub fn root_hex(&self) -> String {
        self.root().to_hex_prefixed()
    }

    /// Hash function the tree was built with
    pub const fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Options the tree was built with
    pub const fn options(&self) -> &TreeOptions {
        &self.options
    }

    /// Leaf digests in input order
    pub fn leaves(&self) -> &[Digest] {
        &self.levels[0]
    }

    /// Number of leaves
    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Leaf at `index`
    pub fn leaf(&self, index: usize) -> Option<Leaf> {
        self.levels[0].get(index).map(|digest| Leaf {
            index,
            digest: digest.clone(),
        })
    }

    /// Position of the first leaf equal to `digest`
    pub fn leaf_index(&self, digest: &Digest) -> Option<usize> {
        self.levels[0].iter().position(|leaf| leaf == digest)
    }

    /// Number of levels above the leaves, equal to the length of every proof
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// All levels, from the leaves up to the root
    pub fn levels(&self) -> &[Vec<Digest>] {
        &self.levels
    }

    /// A single level, `0` being the leaves
    pub fn level(&self, level: usize) -> Option<&[Digest]> {
        self.levels.get(level).map(Vec::as_slice)
    }

    /// The node at `index` within `level`
    pub fn node(&self, level: usize, index: usize) -> Option<Node> {
        let digest = self.levels.get(level)?.get(index)?.clone();
        if level == 0 {
            return Some(Node::Leaf(Leaf { index, digest }));
        }

        let below = &self.levels[level - 1];
        let left = below[2 * index].clone();
        let right = below.get(2 * index + 1).unwrap_or(&left).clone();

        Some(Node::Internal {
            digest,
            left,
            right,
        })
    }

    /// Generate the membership proof for the leaf at `index`
    pub fn proof(&self, index: usize) -> Result<Proof> {
        proof::generate(&self.levels, index, !self.options.sort_pairs)
    }

    /// Generate the membership proof for the first leaf equal to `leaf`
    pub fn proof_for_leaf(&self, leaf: &Digest) -> Result<Proof> {
        let index = self
            .leaf_index(leaf)
            .ok_or_else(|| MerkleError::LeafNotFound(leaf.clone()))?;
        self.proof(index)
    }

    /// Verify `proof` for `leaf` against `root` using this tree's hash
    /// function and options.
    ///
    /// The tree's own levels are not consulted; any root can be checked.
    pub fn verify(&self, proof: &Proof, leaf: &Digest, root: &Digest) -> Result<bool> {
        Verifier::new(&self.hasher, self.options).verify(proof, leaf, root)
    }
}
