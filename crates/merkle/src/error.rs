//! Error types for the allowlist-merkle crate
//!
//! Every fallible operation in the crate returns [`MerkleError`]. The variants
//! map onto the distinct ways a caller can misuse the tree:
//!
//! - `EmptyInput`: a tree was requested over zero values
//! - `IndexOutOfRange`: a proof was requested for a leaf that does not exist
//! - `MalformedProof`: a proof is structurally corrupt (bad digest length)
//! - `LeafNotFound`: a proof was requested by value for a non-member
//! - `InvalidHex`: a digest failed to decode from its hex form
//!
//! A proof that simply does not lead to the claimed root is not an error:
//! verification returns `Ok(false)` in that case.
//!
//! ## Example Usage
//!
//! ```
//! use allowlist_merkle::{Keccak256, MerkleError, TreeBuilder};
//!
//! let values: Vec<&[u8]> = Vec::new();
//! match TreeBuilder::new(Keccak256).build(values) {
//!     Err(MerkleError::EmptyInput) => println!("nothing to commit to"),
//!     Err(e) => println!("other error: {e}"),
//!     Ok(tree) => println!("root: {}", tree.root()),
//! }
//! ```

use alloy_primitives::hex::FromHexError;
use thiserror::Error;

use crate::digest::Digest;

/// Result type for operations in the merkle crate
pub type Result<T> = std::result::Result<T, MerkleError>;

/// Main error type for the merkle crate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MerkleError {
    /// A tree was requested over an empty set of values
    #[error("cannot build a merkle tree from an empty input")]
    EmptyInput,

    /// The requested leaf index does not exist
    #[error("leaf index {index} out of range for tree with {len} leaves")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of leaves in the tree.
        len: usize,
    },

    /// A proof step is structurally invalid
    #[error("malformed proof at step {step}: {reason}")]
    MalformedProof {
        /// Position of the offending step, counted from the leaf.
        step: usize,
        /// What is wrong with the step.
        reason: String,
    },

    /// The requested leaf digest is not part of the tree
    #[error("leaf {0} is not part of the tree")]
    LeafNotFound(Digest),

    /// A digest could not be decoded from hex
    #[error("invalid hex digest: {0}")]
    InvalidHex(#[from] FromHexError),
}

impl MerkleError {
    /// Shorthand for [`MerkleError::IndexOutOfRange`].
    pub const fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Shorthand for [`MerkleError::MalformedProof`].
    pub fn malformed_proof<S: Into<String>>(step: usize, reason: S) -> Self {
        Self::MalformedProof {
            step,
            reason: reason.into(),
        }
    }

    /// A proof step whose sibling digest has the wrong length.
    pub fn digest_length(step: usize, expected: usize, actual: usize) -> Self {
        Self::malformed_proof(
            step,
            format!("sibling digest is {actual} bytes, expected {expected}"),
        )
    }
}
