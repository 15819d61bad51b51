use std::process::ExitCode;

use super::commands::{CommandResult, CommandSummary};

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed successfully
/// - `Failure` (1): Command refused to run (e.g. config file already exists)
/// - `Error` (2): Command failed due to an internal error (I/O error, invalid config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command refused to run.
    Failure,
    /// Command failed due to internal error.
    Error,
}

impl ExitStatus {
    pub fn from_result(result: &CommandResult) -> Self {
        match &result.summary {
            CommandSummary::Init(summary) if !summary.created => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
