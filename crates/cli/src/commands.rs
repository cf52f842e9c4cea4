//! Command implementations
//!
//! Each command writes its report to `out` and returns whether every value it
//! was asked about turned out to be a member.

use std::io::Write;

use allowlist_merkle::{
    Digest, HashFunction, Keccak256, MerkleError, MerkleTree, Proof, TreeBuilder, TreeOptions,
    Verifier,
};
use anyhow::Context;
use log::{debug, warn};

use crate::cli::TreeArgs;
use crate::input::load_values;

/// Load the input values and build the tree over them
fn build_tree(args: &TreeArgs) -> anyhow::Result<(MerkleTree<Keccak256>, Vec<String>)> {
    let values = load_values(args.input.as_deref())?;
    let tree = TreeBuilder::new(Keccak256)
        .with_options(args.options())
        .build(&values)
        .context("failed to build tree")?;
    debug!("tree over {} values, depth {}", tree.leaf_count(), tree.depth());
    Ok((tree, values))
}

pub(crate) fn root<W: Write>(args: &TreeArgs, out: &mut W) -> anyhow::Result<bool> {
    let (tree, _) = build_tree(args)?;
    writeln!(out, "{}", tree.root_hex())?;
    Ok(true)
}

pub(crate) fn show<W: Write>(args: &TreeArgs, out: &mut W) -> anyhow::Result<bool> {
    let (tree, _) = build_tree(args)?;
    writeln!(out, "Root hash: {}", tree.root_hex())?;
    write!(out, "{tree}")?;
    Ok(true)
}

pub(crate) fn prove<W: Write>(args: &TreeArgs, value: &str, out: &mut W) -> anyhow::Result<bool> {
    let (tree, _) = build_tree(args)?;
    let leaf = Keccak256.hash(value.as_bytes());

    match tree.proof_for_leaf(&leaf) {
        Ok(proof) => {
            for step in &proof {
                writeln!(out, "{step}")?;
            }
            Ok(true)
        }
        Err(MerkleError::LeafNotFound(_)) => {
            warn!("{value} is not part of the tree");
            Ok(false)
        }
        Err(err) => Err(err.into()),
    }
}

pub(crate) fn check<W: Write>(
    args: &TreeArgs,
    values: &[String],
    out: &mut W,
) -> anyhow::Result<bool> {
    let (tree, inputs) = build_tree(args)?;
    let root = tree.root().clone();

    let candidates: &[String] = if values.is_empty() { &inputs } else { values };

    let mut all_members = true;
    for value in candidates {
        let leaf = Keccak256.hash(value.as_bytes());
        let member = match tree.proof_for_leaf(&leaf) {
            Ok(proof) => tree.verify(&proof, &leaf, &root)?,
            Err(MerkleError::LeafNotFound(_)) => false,
            Err(err) => return Err(err.into()),
        };
        writeln!(out, "{value}: {member}")?;
        all_members &= member;
    }

    Ok(all_members)
}

pub(crate) fn verify<W: Write>(
    root: &str,
    proof: &[String],
    sort_pairs: bool,
    value: &str,
    out: &mut W,
) -> anyhow::Result<bool> {
    let root: Digest = root.parse().context("invalid root")?;
    let proof = Proof::from_hex(proof).context("invalid proof")?;

    let verifier = Verifier::new(Keccak256, TreeOptions::default().with_sort_pairs(sort_pairs));
    let leaf = Keccak256.hash(value.as_bytes());
    let member = verifier.verify(&proof, &leaf, &root)?;

    writeln!(out, "{member}")?;
    Ok(member)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SORTED_ROOT: &str = "0x197f278a69a7aad76a9fd4d7a4cfd57bba7bf6b6d8825593bb15ffed295552a4";

    fn run<F>(f: F) -> (bool, String)
    where
        F: FnOnce(&mut Vec<u8>) -> anyhow::Result<bool>,
    {
        let mut out = Vec::new();
        let ok = f(&mut out).unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_root_of_demo_values() {
        let (ok, out) = run(|out| root(&TreeArgs::default(), out));
        assert!(ok);
        assert_eq!(out.trim(), SORTED_ROOT);
    }

    #[test]
    fn test_show_starts_with_root() {
        let (_, out) = run(|out| show(&TreeArgs::default(), out));
        let mut lines = out.lines();
        assert_eq!(lines.next().unwrap(), format!("Root hash: {SORTED_ROOT}"));
        assert!(lines.next().unwrap().starts_with("└─ 197f278a"));
        assert_eq!(out.lines().count(), 1 + 7);
    }

    #[test]
    fn test_check_demo_loop() {
        let (ok, out) = run(|out| check(&TreeArgs::default(), &[], out));
        assert!(ok);
        assert_eq!(
            out,
            "test1@gmail.com: true\ntest2@gmail.com: true\ntest3@gmail.com: true\n"
        );

        let (ok, out) = run(|out| check(&TreeArgs::default(), &["nobody@gmail.com".into()], out));
        assert!(!ok);
        assert_eq!(out, "nobody@gmail.com: false\n");
    }

    #[test]
    fn test_check_defaults_to_loaded_input() {
        let path =
            std::env::temp_dir().join(format!("allowlist-check-{}.txt", std::process::id()));
        std::fs::write(&path, "a@example.com\nb@example.com\n").unwrap();

        let args = TreeArgs {
            input: Some(path.clone()),
            unsorted_pairs: false,
        };
        let (tree, values) = build_tree(&args).unwrap();
        assert_eq!(values, vec!["a@example.com", "b@example.com"]);
        assert_eq!(tree.leaf_count(), 2);

        let (ok, out) = run(|out| check(&args, &[], out));
        std::fs::remove_file(&path).unwrap();

        assert!(ok);
        assert_eq!(out, "a@example.com: true\nb@example.com: true\n");
    }

    #[test]
    fn test_prove_then_verify() {
        let (ok, out) = run(|out| prove(&TreeArgs::default(), "test1@gmail.com", out));
        assert!(ok);
        let steps: Vec<String> = out.lines().map(str::to_owned).collect();
        assert_eq!(steps.len(), 2);

        let (ok, out) = run(|out| verify(SORTED_ROOT, &steps, true, "test1@gmail.com", out));
        assert!(ok);
        assert_eq!(out, "true\n");

        let (ok, _) = run(|out| verify(SORTED_ROOT, &steps, true, "test2@gmail.com", out));
        assert!(!ok);
    }

    #[test]
    fn test_prove_positional_emits_tags() {
        let args = TreeArgs {
            input: None,
            unsorted_pairs: true,
        };
        let (ok, out) = run(|out| prove(&args, "test3@gmail.com", out));
        assert!(ok);
        let steps: Vec<&str> = out.lines().collect();
        assert!(steps[0].starts_with("right:0x"));
        assert!(steps[1].starts_with("left:0x"));
    }

    #[test]
    fn test_prove_missing_value() {
        let (ok, out) = run(|out| prove(&TreeArgs::default(), "nobody@gmail.com", out));
        assert!(!ok);
        assert!(out.is_empty());
    }

    #[test]
    fn test_verify_rejects_bad_hex() {
        let mut out = Vec::new();
        assert!(verify("0xzz", &[], true, "v", &mut out).is_err());
    }
}
