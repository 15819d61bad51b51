//! Word-by-word substitution of a single cell.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::dictionary::Dictionary;
use super::skip::{SkipReason, skip_reason};
use super::status::Status;

/// Maximal runs of Unicode word characters (letters, digits, underscore).
static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Spanish opening marks with no Portuguese counterpart.
const INVERTED_MARKS: &[char] = &['¡', '¿'];

/// A cell after an attempted substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub status: Status,
    /// Set when the cell was blocked.
    pub skip_reason: Option<SkipReason>,
}

/// Translate one cell.
///
/// Blocked cells come back untouched. Otherwise one leading `¡`/`¿` is
/// dropped and every word run is replaced through `dictionary`. The status
/// compares the result against the cell as given, so dropping the inverted
/// mark alone counts as a translation.
///
/// # Examples
///
/// ```
/// use es2pt::core::{Dictionary, Status, translate_cell};
///
/// let result = translate_cell("Bienvenido, Rey", Dictionary::builtin());
/// assert_eq!(result.text, "Bem-vindo, Rei");
/// assert_eq!(result.status, Status::Translated);
/// ```
pub fn translate_cell(text: &str, dictionary: &Dictionary) -> Translation {
    if let Some(reason) = skip_reason(text) {
        return Translation {
            text: text.to_string(),
            status: Status::Blocked,
            skip_reason: Some(reason),
        };
    }

    let stripped = text.strip_prefix(INVERTED_MARKS).unwrap_or(text);
    let translated = substitute_words(stripped, dictionary);

    let status = if translated == text {
        Status::Ignored
    } else {
        Status::Translated
    };

    Translation {
        text: translated,
        status,
        skip_reason: None,
    }
}

/// Replace every word run of `text` found in `dictionary`.
pub fn substitute_words(text: &str, dictionary: &Dictionary) -> String {
    WORD_REGEX
        .replace_all(text, |caps: &Captures| {
            let word = &caps[0];
            substitute_word(word, dictionary).unwrap_or_else(|| word.to_string())
        })
        .into_owned()
}

fn substitute_word(word: &str, dictionary: &Dictionary) -> Option<String> {
    if let Some(value) = dictionary.lookup_exact(word) {
        return Some(value.to_string());
    }
    // a lowercase run gets a lowercase initial even when the value is capitalized
    dictionary
        .lookup_folded(word)
        .map(|value| apply_leading_case(word, value))
}

/// Give `value` the leading case of `source`; only the first character changes.
fn apply_leading_case(source: &str, value: &str) -> String {
    let uppercase = source.chars().next().is_some_and(char::is_uppercase);
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out = String::with_capacity(value.len());
    if uppercase {
        out.extend(first.to_uppercase());
    } else {
        out.extend(first.to_lowercase());
    }
    out.push_str(chars.as_str());
    out
}
