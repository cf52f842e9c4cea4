//! Binary Merkle trees for allowlists
//!
//! This crate commits to a fixed set of values with a single root hash and
//! produces short membership proofs for individual values. A proof can be
//! checked by anyone holding the root, without seeing the rest of the set.
//!
//! ## Key Components
//!
//! - **Hash functions**: [`HashFunction`] with [`Keccak256`] as the default and
//!   [`DigestHasher`] for any RustCrypto digest
//! - **Tree construction**: [`TreeBuilder`] turns values into a [`MerkleTree`]
//! - **Proofs**: [`MerkleTree::proof`] produces a [`Proof`], checked by a
//!   [`Verifier`] against a published root
//!
//! ## Pair ordering
//!
//! By default each pair of digests is sorted before hashing
//! ([`TreeOptions::sort_pairs`]), so proofs carry only sibling digests. With
//! sorting disabled, pairs are hashed in positional order and every proof step
//! records whether its sibling sits on the left or the right. A level with an
//! odd number of nodes pairs its last node with itself.
//!
//! ## Usage Examples
//!
//! ```
//! use allowlist_merkle::{HashFunction, Keccak256, TreeBuilder};
//!
//! let emails = ["test1@gmail.com", "test2@gmail.com", "test3@gmail.com"];
//! let tree = TreeBuilder::new(Keccak256).build(emails).unwrap();
//!
//! // Publish the root
//! println!("root: {}", tree.root_hex());
//!
//! // Prove membership of a value
//! let leaf = Keccak256.hash(b"test2@gmail.com");
//! let proof = tree.proof_for_leaf(&leaf).unwrap();
//! assert!(tree.verify(&proof, &leaf, tree.root()).unwrap());
//!
//! // Anything else is rejected
//! let outsider = Keccak256.hash(b"intruder@gmail.com");
//! assert!(!tree.verify(&proof, &outsider, tree.root()).unwrap());
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): hash leaves and combine large levels on the rayon pool
//! - `serde`: serialize digests (as `0x` hex), proofs and options

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod digest;
pub mod error;
pub mod hasher;
pub mod tree;

// Re-export core types
pub use crate::digest::Digest;
pub use error::{MerkleError, Result};
pub use hasher::{DigestHasher, HashFunction, KECCAK256_OUTPUT_LEN, Keccak256};

// Core tree functionality
pub use tree::{
    Leaf, LeafSet, MerkleTree, Node, Proof, ProofStep, Side, TreeBuilder, TreeOptions, Verifier,
    combine,
};
