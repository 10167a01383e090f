//! # Biblio CLI
//!
//! This is the binary entry point for the `biblio` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Running the interactive catalog menu (the default command) or one of
//!   the utility subcommands.
//! - Handling top-level application errors and translating them into
//!   user-friendly output.
//!
//! The catalog logic itself is defined in the `lib.rs` library crate,
//! ensuring that the binary is a thin wrapper around the reusable library
//! functionality.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
