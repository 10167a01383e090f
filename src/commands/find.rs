//! # Find Action
//!
//! Menu action 3: look up a catalog entry by ISBN and print its rendering.
//!
//! This is a read-only action; an unknown ISBN surfaces as a recoverable
//! error that the menu loop renders with a "did you mean" hint when a
//! close key exists.

use std::io::{BufRead, Write};

use biblio::catalog::Catalog;
use biblio::error::Result;

use super::prompt::Prompt;

/// Execute the "find by ISBN" action.
pub fn execute<R: BufRead, W: Write>(catalog: &Catalog, prompt: &mut Prompt<R, W>) -> Result<()> {
    let isbn = prompt.read_line("ISBN: ")?;
    let rendering = catalog.find(&isbn)?.to_string();
    prompt.say(&rendering)
}
