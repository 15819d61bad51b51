use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

use super::SkippedFile;

/// A file that passed the name and size checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub name: String,
}

/// Result of scanning the root directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub candidates: Vec<Candidate>,
    pub skipped: Vec<SkippedFile>,
}

/// List the files directly inside `root` that match `file_pattern`, sorted by
/// name, and split them on `size_threshold`.
///
/// The log file is never a candidate, whatever its extension. Hidden files
/// only match patterns that start with a literal dot.
pub fn scan_candidates(
    root: &Path,
    file_pattern: &str,
    log_file: &str,
    size_threshold: u64,
) -> Result<ScanResult> {
    let pattern = Pattern::new(file_pattern)
        .with_context(|| format!("Invalid file pattern: \"{}\"", file_pattern))?;
    let match_options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let mut result = ScanResult::default();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to read directory: {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if name == log_file || !pattern.matches_with(&name, match_options) {
            continue;
        }

        let size = entry
            .metadata()
            .with_context(|| format!("Failed to read metadata: {}", entry.path().display()))?
            .len();

        if size <= size_threshold {
            result.skipped.push(SkippedFile::too_small(name, size));
            continue;
        }

        result.candidates.push(Candidate {
            path: entry.into_path(),
            name,
        });
    }

    Ok(result)
}
