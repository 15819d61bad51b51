use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command, TranslateArgs, TranslateCommand};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();
    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(ExitStatus::from_result(&result))
}
