use std::{fmt, fs, path::Path};

use anyhow::{Context, Result};

use crate::core::Status;

/// One line of the run log: `name;METHOD;STATUS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub name: String,
    pub method: String,
    pub status: Status,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{}", self.name, self.method, self.status)
    }
}

/// Overwrite `path` with one line per entry.
pub fn write_log(path: &Path, entries: &[LogEntry]) -> Result<()> {
    let content: String = entries.iter().map(|entry| format!("{}\n", entry)).collect();
    fs::write(path, content).with_context(|| format!("Failed to write log: {}", path.display()))
}
