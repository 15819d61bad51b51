use super::{
    args::{Arguments, Command, TranslateCommand},
    commands::CommandResult,
    commands::{init::init, translate::translate},
};
use anyhow::Result;

/// Main entry point for the es2pt CLI.
///
/// Dispatches to the appropriate command handler based on the parsed
/// arguments. Running without a command is the same as `translate` with
/// default flags.
///
/// # Returns
/// - `Ok(CommandResult)` with the command's summary
/// - `Err` if the command fails (e.g., invalid config, I/O errors)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Translate(cmd)) => translate(cmd),
        Some(Command::Init) => init(),
        None => translate(TranslateCommand::default()),
    }
}
