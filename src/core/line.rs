//! Splicing a translated cell back into its delimited line.

use super::dictionary::Dictionary;
use super::skip::SkipReason;
use super::status::Status;
use super::substitute::translate_cell;

pub const DELIMITER: char = ';';

const COMMENT_PREFIX: char = '#';

/// A data line cut around its target cell.
///
/// `prefix` keeps the delimiter that precedes the cell and `suffix` starts
/// with the delimiter that ends it, so `prefix + cell + suffix` is the
/// original line byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineParts<'a> {
    pub prefix: &'a str,
    pub cell: &'a str,
    pub suffix: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// `#` line, copied verbatim.
    Comment,
    /// Not enough fields to reach the target column, copied verbatim.
    Malformed,
    /// The target cell went through substitution.
    Cell(Status),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenLine {
    pub text: String,
    pub outcome: LineOutcome,
    /// Why the target cell was blocked, if it was.
    pub skip_reason: Option<SkipReason>,
}

/// Cut `line` around field `column`, or `None` if the line is too short.
pub fn split_line(line: &str, column: usize) -> Option<LineParts<'_>> {
    let start = if column == 0 {
        0
    } else {
        let (index, _) = line.match_indices(DELIMITER).nth(column - 1)?;
        index + DELIMITER.len_utf8()
    };

    let end = line[start..]
        .find(DELIMITER)
        .map_or(line.len(), |offset| start + offset);

    Some(LineParts {
        prefix: &line[..start],
        cell: &line[start..end],
        suffix: &line[end..],
    })
}

pub fn is_comment(line: &str) -> bool {
    line.starts_with(COMMENT_PREFIX)
}

/// Translate the target cell of a data line, leaving everything else as is.
pub fn rewrite_line(line: &str, column: usize, dictionary: &Dictionary) -> RewrittenLine {
    if is_comment(line) {
        return RewrittenLine {
            text: line.to_string(),
            outcome: LineOutcome::Comment,
            skip_reason: None,
        };
    }

    let Some(parts) = split_line(line, column) else {
        return RewrittenLine {
            text: line.to_string(),
            outcome: LineOutcome::Malformed,
            skip_reason: None,
        };
    };

    let translation = translate_cell(parts.cell, dictionary);
    let text = format!("{}{}{}", parts.prefix, translation.text, parts.suffix);

    RewrittenLine {
        text,
        outcome: LineOutcome::Cell(translation.status),
        skip_reason: translation.skip_reason,
    }
}
