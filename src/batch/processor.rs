use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result};

use crate::core::{
    LineOutcome, RewrittenLine, SkipReason, Status, locate_in_header, rewrite_line,
};

use super::BatchOptions;

/// Cell counts for one rewritten file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReport {
    pub name: String,
    /// Index of the target column in this file.
    pub column: usize,
    pub translated: usize,
    pub ignored: usize,
    pub blocked: usize,
    pub comments: usize,
    pub malformed: usize,
    /// Blocked cells per rule.
    pub blocked_reasons: BTreeMap<SkipReason, usize>,
}

impl FileReport {
    fn record(&mut self, line: &RewrittenLine) {
        if let Some(reason) = line.skip_reason {
            *self.blocked_reasons.entry(reason).or_default() += 1;
        }
        match line.outcome {
            LineOutcome::Comment => self.comments += 1,
            LineOutcome::Malformed => self.malformed += 1,
            LineOutcome::Cell(Status::Translated) => self.translated += 1,
            LineOutcome::Cell(Status::Ignored) => self.ignored += 1,
            LineOutcome::Cell(Status::Blocked) => self.blocked += 1,
        }
    }

    pub fn cells(&self) -> usize {
        self.translated + self.ignored + self.blocked
    }
}

#[derive(Debug)]
pub enum FileOutcome {
    Processed(FileReport),
    /// Empty file or no target column in the header.
    NoTargetColumn,
}

/// Rewrite the target column of one file in place.
///
/// The file is read whole, with invalid UTF-8 replaced, and written back
/// whole with `\n` line endings and a trailing newline. Nothing is written in
/// dry-run mode.
pub fn process_file(path: &Path, name: &str, options: &BatchOptions) -> Result<FileOutcome> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    let content = String::from_utf8_lossy(&bytes);

    let mut lines = content.lines();
    let Some(header) = lines.next() else {
        return Ok(FileOutcome::NoTargetColumn);
    };
    let Some(column) = locate_in_header(header, &options.target_column, options.fallback_column)
    else {
        return Ok(FileOutcome::NoTargetColumn);
    };

    let mut report = FileReport {
        name: name.to_string(),
        column,
        ..FileReport::default()
    };

    let mut output = String::with_capacity(content.len() + 1);
    output.push_str(header);
    output.push('\n');
    for line in lines {
        let rewritten = rewrite_line(line, column, &options.dictionary);
        report.record(&rewritten);
        output.push_str(&rewritten.text);
        output.push('\n');
    }

    if !options.dry_run {
        fs::write(path, output)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
    }

    Ok(FileOutcome::Processed(report))
}
