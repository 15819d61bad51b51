//! Cells that must not go through word substitution.
//!
//! Formatting codes and template placeholders would be corrupted by a
//! word-for-word replacement, so any cell carrying one is left as is.

use std::sync::LazyLock;

use regex::Regex;

static BRACKET_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[.*?\]").unwrap());

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$[^$]+\$|__PROTECTED_\d+__").unwrap());

/// Literal backslash followed by `n`, as stored in the files.
const ESCAPED_NEWLINE: &str = "\\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SkipReason {
    Empty,
    EscapedNewline,
    Bracketed,
    Placeholder,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::Empty => "empty",
            SkipReason::EscapedNewline => "escaped newline",
            SkipReason::Bracketed => "bracketed token",
            SkipReason::Placeholder => "placeholder",
        }
    }
}

/// Return the first rule that makes `text` ineligible, if any.
pub fn skip_reason(text: &str) -> Option<SkipReason> {
    if text.is_empty() {
        Some(SkipReason::Empty)
    } else if text.contains(ESCAPED_NEWLINE) {
        Some(SkipReason::EscapedNewline)
    } else if BRACKET_REGEX.is_match(text) {
        Some(SkipReason::Bracketed)
    } else if PLACEHOLDER_REGEX.is_match(text) {
        Some(SkipReason::Placeholder)
    } else {
        None
    }
}

pub fn should_skip(text: &str) -> bool {
    skip_reason(text).is_some()
}
