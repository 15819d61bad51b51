use crate::batch::BatchSummary;

#[derive(Debug)]
pub enum CommandSummary {
    Translate(TranslateSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct TranslateSummary {
    pub batch: BatchSummary,
    pub dry_run: bool,
    /// Threshold the run actually used, after config and flags.
    pub size_threshold: u64,
    /// True if a config file was found.
    pub config_from_file: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    /// False when the config file already existed.
    pub created: bool,
}

/// Result of running es2pt commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}
