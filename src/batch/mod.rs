//! Batch driver: rewrite every eligible file of a directory, then log.
//!
//! Files are handled one at a time, in name order. Any I/O error stops the
//! run; files rewritten before the error stay rewritten and no log is
//! written.

mod log;
mod processor;
mod scanner;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::Config;
use crate::core::{Dictionary, Status};

pub use log::{LogEntry, write_log};
pub use processor::{FileOutcome, FileReport, process_file};
pub use scanner::{Candidate, ScanResult, scan_candidates};

/// Everything a batch run needs, resolved from config and CLI flags.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub root: PathBuf,
    pub file_pattern: String,
    pub log_file: String,
    pub size_threshold: u64,
    pub target_column: String,
    pub fallback_column: Option<usize>,
    pub method: String,
    pub dictionary: Dictionary,
    pub dry_run: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self::from_config(Path::new("."), &Config::default())
    }
}

impl BatchOptions {
    pub fn from_config(root: &Path, config: &Config) -> Self {
        let mut dictionary = Dictionary::builtin().clone();
        dictionary.extend(config.dictionary_entries());

        Self {
            root: root.to_path_buf(),
            file_pattern: config.file_pattern.clone(),
            log_file: config.log_file.clone(),
            size_threshold: config.size_threshold,
            target_column: config.target_column.clone(),
            fallback_column: config.fallback_column,
            method: config.method.clone(),
            dictionary,
            dry_run: false,
        }
    }

    /// Location of the run log; a bare file name when running in `.`.
    pub fn log_path(&self) -> PathBuf {
        if self.root.as_os_str().is_empty() || self.root == Path::new(".") {
            PathBuf::from(&self.log_file)
        } else {
            self.root.join(&self.log_file)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipCause {
    /// At or below the size threshold.
    TooSmall { size: u64 },
    /// Empty, or no header matches the target column.
    NoTargetColumn,
}

/// A matching file that was left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub name: String,
    pub cause: SkipCause,
}

impl SkippedFile {
    pub fn too_small(name: String, size: u64) -> Self {
        Self {
            name,
            cause: SkipCause::TooSmall { size },
        }
    }
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub processed: Vec<FileReport>,
    pub skipped: Vec<SkippedFile>,
    pub log_path: PathBuf,
}

impl BatchSummary {
    pub fn log_entries(&self, method: &str) -> Vec<LogEntry> {
        self.processed
            .iter()
            .map(|report| LogEntry {
                name: report.name.clone(),
                method: method.to_string(),
                // file-level status does not depend on cell outcomes
                status: Status::Translated,
            })
            .collect()
    }
}

/// Run the whole batch described by `options`.
pub fn run_batch(options: &BatchOptions) -> Result<BatchSummary> {
    let scan = scan_candidates(
        &options.root,
        &options.file_pattern,
        &options.log_file,
        options.size_threshold,
    )?;

    let mut summary = BatchSummary {
        skipped: scan.skipped,
        log_path: options.log_path(),
        ..BatchSummary::default()
    };

    for candidate in &scan.candidates {
        match process_file(&candidate.path, &candidate.name, options)? {
            FileOutcome::Processed(report) => summary.processed.push(report),
            FileOutcome::NoTargetColumn => summary.skipped.push(SkippedFile {
                name: candidate.name.clone(),
                cause: SkipCause::NoTargetColumn,
            }),
        }
    }

    if !options.dry_run {
        write_log(&summary.log_path, &summary.log_entries(&options.method))?;
    }

    Ok(summary)
}
