//! # Interactive Menu
//!
//! The conversational front end of the catalog: a loop that prints the
//! action list, reads a selection, and dispatches to the action modules.
//!
//! ## Error recovery
//!
//! Every catalog or input error is caught per action, rendered, and the
//! loop continues; nothing short of an I/O failure on the terminal itself
//! ends the session. Invalid lines are consumed whole, so a bad field
//! entry never bleeds into the next prompt. An unknown ISBN is rendered
//! with a "did you mean" hint when a close key exists.
//!
//! The loop ends on action 9 or when input runs out at the menu.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use biblio::catalog::Catalog;
use biblio::defaults;
use biblio::error::Error;
use biblio::output::{emoji, OutputConfig};
use biblio::suggestions;

use super::prompt::Prompt;
use super::{add, find, remove, search, stats, update};

/// The action list, printed before every selection.
const MENU: &str = "\
1. Add book
2. Add magazine
3. Find by ISBN
4. Remove element
5. Search by author
6. Search by year
7. Update element
8. Statistics
9. Quit";

/// Whether the session goes on after an action.
enum Flow {
    Continue,
    Quit,
}

/// Execute the `menu` command: seed a fresh catalog and run the session
/// on the process's standard streams.
pub fn execute(output: &OutputConfig) -> Result<()> {
    let mut catalog = Catalog::new();
    defaults::seed_catalog(&mut catalog);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut catalog, stdin.lock(), stdout.lock(), output)
}

/// Run the interactive session over the given input and output handles.
pub fn run<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    input: R,
    out: W,
    output: &OutputConfig,
) -> Result<()> {
    let mut prompt = Prompt::new(input, out);

    loop {
        prompt.say(MENU)?;
        let Some(line) = prompt.next_line()? else {
            break;
        };

        match dispatch(&line, catalog, &mut prompt, output) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            // Terminal failures are not recoverable by re-prompting.
            Err(Error::Io(err)) => return Err(err.into()),
            Err(err) => report(&err, catalog, &mut prompt, output)?,
        }
    }

    Ok(())
}

/// Parse a menu selection and run the matching action.
fn dispatch<R: BufRead, W: Write>(
    line: &str,
    catalog: &mut Catalog,
    prompt: &mut Prompt<R, W>,
    output: &OutputConfig,
) -> biblio::error::Result<Flow> {
    let text = line.trim();
    let choice: i32 = text.parse().map_err(|_| Error::InvalidInput {
        message: format!("expected a number, got '{text}'"),
    })?;

    match choice {
        1 => add::book(catalog, prompt, output)?,
        2 => add::magazine(catalog, prompt, output)?,
        3 => find::execute(catalog, prompt)?,
        4 => remove::execute(catalog, prompt, output)?,
        5 => search::by_author(catalog, prompt)?,
        6 => search::by_year(catalog, prompt)?,
        7 => update::execute(catalog, prompt, output)?,
        8 => stats::execute(catalog, prompt)?,
        9 => {
            prompt.say("Goodbye!")?;
            return Ok(Flow::Quit);
        }
        other => {
            return Err(Error::InvalidInput {
                message: format!("menu choice must be between 1 and 9, got {other}"),
            })
        }
    }

    Ok(Flow::Continue)
}

/// Render a recoverable error, with a hint for near-miss ISBNs.
fn report<R: BufRead, W: Write>(
    err: &Error,
    catalog: &Catalog,
    prompt: &mut Prompt<R, W>,
    output: &OutputConfig,
) -> Result<()> {
    prompt.say(&format!(
        "{} {}",
        emoji(output, "✖", "[ERROR]"),
        output.paint_error(&err.to_string())
    ))?;

    if let Error::NotFound { isbn } = err {
        if let Some(candidate) = suggestions::similar_isbn(isbn, &catalog.isbns()) {
            prompt.say(&format!("hint: did you mean '{candidate}'?"))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(input: &str) -> (Catalog, String) {
        let mut catalog = Catalog::new();
        defaults::seed_catalog(&mut catalog);
        let mut out = Vec::new();
        run(
            &mut catalog,
            Cursor::new(input.as_bytes()),
            &mut out,
            &OutputConfig { use_color: false },
        )
        .unwrap();
        (catalog, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_quit_prints_farewell() {
        let (_, output) = run_session("9\n");
        assert!(output.contains("1. Add book"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_eof_at_menu_ends_session_without_farewell() {
        let (catalog, output) = run_session("");
        assert_eq!(catalog.len(), 2);
        assert!(output.contains("9. Quit"));
        assert!(!output.contains("Goodbye!"));
    }

    #[test]
    fn test_unknown_choice_is_recovered() {
        let (_, output) = run_session("12\n9\n");
        assert!(output.contains("menu choice must be between 1 and 9, got 12"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_non_numeric_choice_is_recovered() {
        let (_, output) = run_session("quit\n9\n");
        assert!(output.contains("invalid input: expected a number, got 'quit'"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_full_add_and_find_session() {
        let (catalog, output) =
            run_session("1\n789\nThe Hobbit\n1937\n310\nJ.R.R. Tolkien\n3\n789\n9\n");

        assert_eq!(catalog.len(), 3);
        assert!(output.contains("[OK] Added book 789"));
        assert!(output.contains("ISBN: 789, Title: The Hobbit"));
    }

    #[test]
    fn test_not_found_renders_hint_for_close_isbn() {
        let (_, output) = run_session("3\n124\n9\n");
        assert!(output.contains("[ERROR] element with ISBN 124 not found"));
        assert!(output.contains("hint: did you mean '123'?"));
    }

    #[test]
    fn test_not_found_without_close_isbn_has_no_hint() {
        let (_, output) = run_session("3\n999999\n9\n");
        assert!(output.contains("not found"));
        assert!(!output.contains("did you mean"));
    }

    #[test]
    fn test_eof_mid_action_is_reported_then_session_ends() {
        // The add action loses its input halfway through; the error is
        // rendered and the next menu read sees end of input.
        let (catalog, output) = run_session("1\n789\nThe Hobbit\n");
        assert!(output.contains("unexpected end of input"));
        assert_eq!(catalog.len(), 2);
    }
}
