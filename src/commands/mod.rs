//! # CLI Command Implementations
//!
//! This module contains the implementation for each action of the `biblio`
//! command-line tool. Each menu action is defined in its own file to keep
//! the logic separated and maintainable.
//!
//! ## Structure
//!
//! The `menu` module owns the interactive loop: it prints the action list,
//! reads the selection, and dispatches to the action modules. Each action
//! module exposes an `execute` entry point (or a pair of them) that reads
//! its fields through a [`prompt::Prompt`] and calls into the `biblio`
//! library to perform the catalog operation.
//!
//! All prompting is line-based over injected `BufRead`/`Write` handles, so
//! tests can drive a whole session from a string.

pub mod add;
pub mod completions;
pub mod find;
pub mod menu;
pub mod prompt;
pub mod remove;
pub mod search;
pub mod stats;
pub mod update;
