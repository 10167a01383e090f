//! # Search Actions
//!
//! Menu actions 5 and 6: filtered searches over the catalog.
//!
//! The author search matches book authors case-insensitively (exact match,
//! not substring) and never returns magazines. The year search matches
//! both variants on the exact publication year. Neither search can fail;
//! an empty result prints "No matches."

use std::io::{BufRead, Write};

use biblio::catalog::Catalog;
use biblio::error::Result;
use biblio::record::Record;

use super::prompt::Prompt;

/// Execute the "search by author" action.
pub fn by_author<R: BufRead, W: Write>(
    catalog: &Catalog,
    prompt: &mut Prompt<R, W>,
) -> Result<()> {
    let author = prompt.read_line("Author: ")?;
    render(catalog.search_by_author(&author), prompt)
}

/// Execute the "search by year" action.
pub fn by_year<R: BufRead, W: Write>(catalog: &Catalog, prompt: &mut Prompt<R, W>) -> Result<()> {
    let year = prompt.read_int("Year: ")?;
    render(catalog.search_by_year(year), prompt)
}

/// Print one record per line, or a placeholder when nothing matched.
fn render<R: BufRead, W: Write>(hits: Vec<&Record>, prompt: &mut Prompt<R, W>) -> Result<()> {
    if hits.is_empty() {
        return prompt.say("No matches.");
    }
    for record in hits {
        let rendering = record.to_string();
        prompt.say(&rendering)?;
    }
    Ok(())
}
