//! Proof verification against a published root.
//!
//! Verification needs only the leaf digest, the proof and the root; it never
//! touches a tree. A proof that leads to a different root is a normal `false`
//! outcome. Only a structurally broken proof is an error.

use log::debug;

use super::options::{Side, TreeOptions, combine};
use super::proof::Proof;
use crate::digest::Digest;
use crate::error::{MerkleError, Result};
use crate::hasher::{HashFunction, Keccak256};

/// Checks membership proofs with a fixed hash function and policy.
///
/// ```
/// use allowlist_merkle::{HashFunction, Keccak256, TreeBuilder, TreeOptions, Verifier};
///
/// let tree = TreeBuilder::new(Keccak256)
///     .build(["test1@gmail.com", "test2@gmail.com", "test3@gmail.com"])
///     .unwrap();
/// let proof = tree.proof(0).unwrap();
///
/// // The verifier only needs the published root.
/// let verifier = Verifier::new(Keccak256, TreeOptions::default());
/// let leaf = Keccak256.hash(b"test1@gmail.com");
/// assert!(verifier.verify(&proof, &leaf, tree.root()).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Verifier<H = Keccak256> {
    hasher: H,
    options: TreeOptions,
}

impl<H: HashFunction> Verifier<H> {
    /// Create a verifier; `options` must match those the tree was built with
    pub const fn new(hasher: H, options: TreeOptions) -> Self {
        Self { hasher, options }
    }

    /// Options the verifier combines with
    pub const fn options(&self) -> &TreeOptions {
        &self.options
    }

    /// Fold `proof` over `leaf` and return the resulting root.
    ///
    /// Fails with [`MerkleError::MalformedProof`] if a sibling digest has the
    /// wrong length, or if a step carries no side tag while pairs are
    /// positional.
    pub fn compute_root(&self, proof: &Proof, leaf: &Digest) -> Result<Digest> {
        let expected = self.hasher.output_len();
        let mut current = leaf.clone();

        for (step, entry) in proof.iter().enumerate() {
            if entry.sibling.len() != expected {
                return Err(MerkleError::digest_length(
                    step,
                    expected,
                    entry.sibling.len(),
                ));
            }

            current = if self.options.sort_pairs {
                combine(&self.hasher, true, &current, &entry.sibling)
            } else {
                match entry.side {
                    Some(Side::Left) => combine(&self.hasher, false, &entry.sibling, &current),
                    Some(Side::Right) => combine(&self.hasher, false, &current, &entry.sibling),
                    None => {
                        return Err(MerkleError::malformed_proof(
                            step,
                            "missing side tag for positional pairs",
                        ));
                    }
                }
            };
        }

        Ok(current)
    }

    /// Check that `proof` links `leaf` to `root`
    pub fn verify(&self, proof: &Proof, leaf: &Digest, root: &Digest) -> Result<bool> {
        let computed = self.compute_root(proof, leaf)?;
        let valid = &computed == root;

        debug!(
            "verified proof of {} steps for leaf {}: {}",
            proof.len(),
            leaf,
            if valid { "match" } else { "mismatch" }
        );

        Ok(valid)
    }
}
