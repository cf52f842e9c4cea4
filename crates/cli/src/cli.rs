//! Command-line interface definition

use std::path::PathBuf;

use allowlist_merkle::TreeOptions;
use clap::{ArgAction, Args, Parser, Subcommand};

/// Build allowlist merkle trees and check membership proofs
#[derive(Parser, Debug, Clone)]
#[command(name = "allowlist", version, about)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

/// Where the values come from and how pairs are combined
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct TreeArgs {
    /// File with one value per line; the built-in demo list is used if omitted
    #[arg(short, long)]
    pub(crate) input: Option<PathBuf>,

    /// Hash pairs in positional order instead of sorting them
    #[arg(long)]
    pub(crate) unsorted_pairs: bool,
}

impl TreeArgs {
    pub(crate) const fn options(&self) -> TreeOptions {
        TreeOptions::SORTED.with_sort_pairs(!self.unsorted_pairs)
    }
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Command {
    /// Print the root hash
    Root {
        #[command(flatten)]
        tree: TreeArgs,
    },
    /// Print the root hash and the whole tree
    Show {
        #[command(flatten)]
        tree: TreeArgs,
    },
    /// Print the membership proof for a value
    Prove {
        /// The value to prove
        value: String,

        #[command(flatten)]
        tree: TreeArgs,
    },
    /// Check values against the tree, printing true or false for each
    Check {
        /// Values to check; every input value if none are given
        values: Vec<String>,

        #[command(flatten)]
        tree: TreeArgs,
    },
    /// Verify a proof against a published root without the tree
    Verify {
        /// Published root hash (hex)
        #[arg(long)]
        root: String,

        /// Proof step (hex, optionally prefixed with `left:` or `right:`); repeat
        /// or separate with commas, leaf side first
        #[arg(long, action = ArgAction::Append, value_delimiter = ',')]
        proof: Vec<String>,

        /// Proof was produced with positional pairs
        #[arg(long)]
        unsorted_pairs: bool,

        /// The value whose membership is claimed
        value: String,
    },
}
