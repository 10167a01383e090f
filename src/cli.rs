//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use biblio::output::OutputConfig;

use crate::commands;

/// Biblio - Interactive catalog of books and magazines
#[derive(Parser, Debug)]
#[command(name = "biblio")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Subcommand to execute; defaults to the interactive menu
    #[command(subcommand)]
    command: Option<Commands>,

    /// Colorize output (always, never, auto)
    #[arg(
        long,
        global = true,
        value_name = "WHEN",
        default_value = "auto",
        env = "BIBLIO_COLOR"
    )]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the interactive catalog menu
    Menu,
    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            None | Some(Commands::Menu) => commands::menu::execute(&output),
            Some(Commands::Completions(args)) => commands::completions::execute(args),
        }
    }
}

/// Initialize env_logger with the level from --log-level.
///
/// Logs go to stderr, keeping stdout free for the menu conversation.
fn init_logging(level: &str) {
    let filter = level.parse().unwrap_or(log::LevelFilter::Info);
    let _ = env_logger::Builder::new()
        .filter_level(filter)
        .format_timestamp(None)
        .try_init();
}
