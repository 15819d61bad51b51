//! Report formatting and printing utilities.
//!
//! Separate from the batch logic to allow es2pt to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, InitSummary, TranslateSummary};
use crate::batch::{FileReport, SkipCause, SkippedFile};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Translate(summary) => {
            print_translate_to(
                summary,
                verbose,
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
            );
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
}

/// Print the outcome of a translate run.
///
/// The last stdout line is always the one-line summary. Per-file details go
/// to stdout in verbose and dry-run mode, skipped files to stderr in verbose
/// mode. Verbose mode also breaks blocked cells down by rule.
pub fn print_translate_to<W: Write, E: Write>(
    summary: &TranslateSummary,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    let batch = &summary.batch;

    if verbose {
        if summary.config_from_file {
            let _ = writeln!(err, "{} using {}", "note:".bold().cyan(), CONFIG_FILE_NAME);
        }
        for skipped in &batch.skipped {
            print_skipped(skipped, summary.size_threshold, err);
        }
    }

    if verbose || summary.dry_run {
        print_file_table(&batch.processed, verbose, out);
    }

    if summary.dry_run {
        let _ = writeln!(out, "Dry run: would process {} files.", batch.processed.len());
    } else {
        let _ = writeln!(
            out,
            "Processed {} files. Log: {}",
            batch.processed.len(),
            batch.log_path.display()
        );
    }
}

fn print_skipped<E: Write>(skipped: &SkippedFile, size_threshold: u64, err: &mut E) {
    let reason = match skipped.cause {
        SkipCause::TooSmall { size } => {
            format!("{} bytes, not above the {} byte threshold", size, size_threshold)
        }
        SkipCause::NoTargetColumn => "no target column in header".to_string(),
    };
    let _ = writeln!(
        err,
        "{} skipped {} ({})",
        "note:".bold().cyan(),
        skipped.name,
        reason
    );
}

fn print_file_table<W: Write>(reports: &[FileReport], verbose: bool, out: &mut W) {
    let name_width = reports
        .iter()
        .map(|report| report.name.width())
        .max()
        .unwrap_or(0);

    for report in reports {
        let padding = " ".repeat(name_width - report.name.width());
        let _ = writeln!(
            out,
            "  {}{}  column {}: {} translated, {} ignored, {} blocked, {} comments, {} malformed",
            report.name.bold(),
            padding,
            report.column,
            report.translated.to_string().green(),
            report.ignored,
            report.blocked.to_string().yellow(),
            report.comments,
            report.malformed,
        );

        if verbose && !report.blocked_reasons.is_empty() {
            let reasons: Vec<String> = report
                .blocked_reasons
                .iter()
                .map(|(reason, count)| format!("{} {}", count, reason.as_str()))
                .collect();
            let _ = writeln!(out, "    {} {}", "blocked:".yellow(), reasons.join(", "));
        }
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
    }
}
