//! # Add Actions
//!
//! Menu actions 1 and 2: add a book or a magazine to the catalog.
//!
//! Both actions prompt for the shared fields (ISBN, title, year, pages)
//! followed by the variant-specific one, construct the record, and insert
//! it. A duplicate ISBN surfaces as a recoverable error after the fields
//! have been read; the catalog is left untouched.

use std::io::{BufRead, Write};

use biblio::catalog::Catalog;
use biblio::error::Result;
use biblio::output::{emoji, OutputConfig};
use biblio::record::Record;

use super::prompt::Prompt;

/// Execute the "add book" action.
pub fn book<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    prompt: &mut Prompt<R, W>,
    output: &OutputConfig,
) -> Result<()> {
    let isbn = prompt.read_line("ISBN: ")?;
    let title = prompt.read_line("Title: ")?;
    let year = prompt.read_int("Year: ")?;
    let pages = prompt.read_int("Pages: ")?;
    let author = prompt.read_line("Author: ")?;

    catalog.add(Record::book(&isbn, &title, year, pages, &author))?;
    log::debug!("added book {isbn}");
    let tag = emoji(output, "✔", "[OK]");
    prompt.say(&output.paint_success(&format!("{tag} Added book {isbn}")))
}

/// Execute the "add magazine" action.
pub fn magazine<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    prompt: &mut Prompt<R, W>,
    output: &OutputConfig,
) -> Result<()> {
    let isbn = prompt.read_line("ISBN: ")?;
    let title = prompt.read_line("Title: ")?;
    let year = prompt.read_int("Year: ")?;
    let pages = prompt.read_int("Pages: ")?;
    let periodicity = prompt.read_line("Periodicity: ")?;

    catalog.add(Record::magazine(&isbn, &title, year, pages, &periodicity))?;
    log::debug!("added magazine {isbn}");
    let tag = emoji(output, "✔", "[OK]");
    prompt.say(&output.paint_success(&format!("{tag} Added magazine {isbn}")))
}
