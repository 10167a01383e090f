//! # Update Action
//!
//! Menu action 7: replace a catalog entry with a newly constructed record,
//! possibly changing its variant.
//!
//! The flow prompts for the target ISBN and the new element type first;
//! an unknown type is rejected before any field prompts, with no catalog
//! mutation. The replacement record is constructed with the target ISBN,
//! so the interactive flow never diverges a record's identifier from its
//! map key (the library's `update` itself does not enforce that).

use std::io::{BufRead, Write};

use biblio::catalog::Catalog;
use biblio::error::{Error, Result};
use biblio::output::{emoji, OutputConfig};
use biblio::record::Record;

use super::prompt::Prompt;

/// Execute the "update element" action.
pub fn execute<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    prompt: &mut Prompt<R, W>,
    output: &OutputConfig,
) -> Result<()> {
    let isbn = prompt.read_line("ISBN of the element to update: ")?;
    let element_type = prompt.read_int("New element type (1 = book, 2 = magazine): ")?;

    let record = match element_type {
        1 => {
            let title = prompt.read_line("Title: ")?;
            let year = prompt.read_int("Year: ")?;
            let pages = prompt.read_int("Pages: ")?;
            let author = prompt.read_line("Author: ")?;
            Record::book(&isbn, &title, year, pages, &author)
        }
        2 => {
            let title = prompt.read_line("Title: ")?;
            let year = prompt.read_int("Year: ")?;
            let pages = prompt.read_int("Pages: ")?;
            let periodicity = prompt.read_line("Periodicity: ")?;
            Record::magazine(&isbn, &title, year, pages, &periodicity)
        }
        other => {
            return Err(Error::InvalidInput {
                message: format!("invalid element type '{other}'"),
            })
        }
    };

    catalog.update(&isbn, record)?;
    log::debug!("updated {isbn}");
    let tag = emoji(output, "✔", "[OK]");
    prompt.say(&output.paint_success(&format!("{tag} Updated {isbn}")))
}
