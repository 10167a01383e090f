//! # Remove Action
//!
//! Menu action 4: delete a catalog entry by ISBN.

use std::io::{BufRead, Write};

use biblio::catalog::Catalog;
use biblio::error::Result;
use biblio::output::{emoji, OutputConfig};

use super::prompt::Prompt;

/// Execute the "remove element" action.
pub fn execute<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    prompt: &mut Prompt<R, W>,
    output: &OutputConfig,
) -> Result<()> {
    let isbn = prompt.read_line("ISBN: ")?;
    catalog.remove(&isbn)?;
    log::debug!("removed {isbn}");
    let tag = emoji(output, "✔", "[OK]");
    prompt.say(&output.paint_success(&format!("{tag} Removed {isbn}")))
}
