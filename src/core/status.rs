use std::fmt;

/// Outcome of an attempted transform, for one cell or one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Output differs from input.
    Translated,
    /// Eligible, but no word was substituted.
    Ignored,
    /// Skipped by a content rule.
    Blocked,
}

impl Status {
    /// Tag written to the log file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Translated => "TRADUZIDO",
            Status::Ignored => "IGNORADO",
            Status::Blocked => "BLOQUEADO",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
