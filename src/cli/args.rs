//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `translate`: Rewrite the Spanish column of every large enough file (default)
//! - `init`: Initialize es2pt configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Defaults to `translate` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Get the verbose flag from the command's args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Translate(cmd)) => cmd.args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct TranslateArgs {
    /// Directory holding the files (defaults to the current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Files at or below this size in bytes are skipped (overrides config file)
    #[arg(long, value_name = "BYTES")]
    pub min_size: Option<u64>,

    /// Report what would change without writing files or the log
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Default, Args)]
pub struct TranslateCommand {
    #[command(flatten)]
    pub args: TranslateArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate the Spanish column of every matching file in place
    Translate(TranslateCommand),
    /// Initialize a new .es2ptrc.json configuration file
    Init,
}
