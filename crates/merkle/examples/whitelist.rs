//! Email whitelist: publish a root, then check membership with proofs

use allowlist_merkle::{
    HashFunction, Keccak256, LeafSet, MerkleError, Result, TreeBuilder, Verifier,
};

fn main() -> Result<()> {
    // List of email addresses to whitelist
    let emails = ["test1@gmail.com", "test2@gmail.com", "test3@gmail.com"];

    // Hash email addresses to get the leaves
    let leaves = LeafSet::from_values(&Keccak256, emails)?;

    // Create the tree with sorted pairs
    let builder = TreeBuilder::new(Keccak256).sort_pairs(true);
    let options = *builder.options();
    let tree = builder.build_from_leaves(leaves);

    println!("Root hash: {}", tree.root_hex());
    println!("{tree}");

    // Only the root is needed on the verifying side
    let root = tree.root().clone();
    let verifier = Verifier::new(Keccak256, options);

    let candidates = [
        "test1@gmail.com",
        "test2@gmail.com",
        "test3@gmail.com",
        "nobody@gmail.com",
    ];
    for value in candidates {
        let leaf = Keccak256.hash(value.as_bytes());
        let whitelisted = match tree.proof_for_leaf(&leaf) {
            Ok(proof) => {
                println!("{value}: proof {:?}", proof.to_hex());
                verifier.verify(&proof, &leaf, &root)?
            }
            Err(MerkleError::LeafNotFound(_)) => false,
            Err(err) => return Err(err),
        };
        println!("{value}: {whitelisted}");
    }

    Ok(())
}
