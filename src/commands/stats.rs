//! # Statistics Action
//!
//! Menu action 8: compute and print aggregate statistics over the catalog.
//!
//! Four lines are printed: the book count, the magazine count, the record
//! with the most pages (ties go to the earliest-inserted entry; "none" on
//! an empty catalog), and the mean page count with one decimal.

use std::io::{BufRead, Write};

use biblio::catalog::Catalog;
use biblio::error::Result;

use super::prompt::Prompt;

/// Execute the "statistics" action.
pub fn execute<R: BufRead, W: Write>(catalog: &Catalog, prompt: &mut Prompt<R, W>) -> Result<()> {
    let stats = catalog.statistics();

    prompt.say(&format!("Total books: {}", stats.books))?;
    prompt.say(&format!("Total magazines: {}", stats.magazines))?;
    match &stats.most_pages {
        Some(record) => prompt.say(&format!("Most pages: {record}"))?,
        None => prompt.say("Most pages: none")?,
    }
    prompt.say(&format!("Average pages: {:.1}", stats.mean_pages))
}
