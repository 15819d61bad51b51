use std::path::PathBuf;

use anyhow::{Context, Result};

use super::super::args::TranslateCommand;
use super::{CommandResult, CommandSummary, TranslateSummary};
use crate::{
    batch::{BatchOptions, run_batch},
    config::{ConfigLoadResult, load_config},
};

pub fn translate(cmd: TranslateCommand) -> Result<CommandResult> {
    let args = cmd.args;
    let root = args.dir.unwrap_or_else(|| PathBuf::from("."));

    let search_start = root
        .canonicalize()
        .with_context(|| format!("Failed to open directory: {}", root.display()))?;
    let ConfigLoadResult {
        mut config,
        from_file,
    } = load_config(&search_start)?;

    if let Some(min_size) = args.min_size {
        config.size_threshold = min_size;
    }

    let options = BatchOptions {
        dry_run: args.dry_run,
        ..BatchOptions::from_config(&root, &config)
    };
    let batch = run_batch(&options)?;

    Ok(CommandResult {
        summary: CommandSummary::Translate(TranslateSummary {
            batch,
            dry_run: options.dry_run,
            size_threshold: options.size_threshold,
            config_from_file: from_file,
        }),
    })
}
