//! Locating the source-language column in a header row.

/// Header name of the column holding the Spanish text.
pub const DEFAULT_TARGET_COLUMN: &str = "SPANISH";

/// Column used when no header matches, if the header is wide enough.
pub const DEFAULT_FALLBACK_COLUMN: usize = 5;

/// Find the zero-based index of the target column.
///
/// Header names are compared trimmed and upper-cased against `target`
/// (which is itself upper-cased). When nothing matches, `fallback` is used
/// as long as the header has more than `fallback` columns.
///
/// # Examples
///
/// ```
/// use es2pt::core::header::locate_target_column;
///
/// assert_eq!(locate_target_column(&["ID", " spanish "], "SPANISH", Some(5)), Some(1));
/// assert_eq!(locate_target_column(&["A", "B"], "SPANISH", Some(5)), None);
/// ```
pub fn locate_target_column(
    columns: &[&str],
    target: &str,
    fallback: Option<usize>,
) -> Option<usize> {
    let target = target.trim().to_uppercase();

    if let Some(index) = columns
        .iter()
        .position(|column| column.trim().to_uppercase() == target)
    {
        return Some(index);
    }

    fallback.filter(|&index| columns.len() > index)
}

/// Split a header line and locate the target column in it.
pub fn locate_in_header(header: &str, target: &str, fallback: Option<usize>) -> Option<usize> {
    let columns: Vec<&str> = header.split(';').collect();
    locate_target_column(&columns, target, fallback)
}
