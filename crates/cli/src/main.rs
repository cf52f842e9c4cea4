//! `allowlist`: build a merkle tree over a list of values, publish its root
//! and check membership proofs.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::error;

mod cli;
mod commands;
mod input;

use cli::{Cli, Command};

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();
    let mut out = io::stdout().lock();

    let result = match &cli.command {
        Command::Root { tree } => commands::root(tree, &mut out),
        Command::Show { tree } => commands::show(tree, &mut out),
        Command::Prove { value, tree } => commands::prove(tree, value, &mut out),
        Command::Check { values, tree } => commands::check(tree, values, &mut out),
        Command::Verify {
            root,
            proof,
            unsorted_pairs,
            value,
        } => commands::verify(root, proof, !unsorted_pairs, value, &mut out),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{err:#}");
            ExitCode::from(2)
        }
    }
}
