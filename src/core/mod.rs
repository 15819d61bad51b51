//! Pure text transforms: everything needed to rewrite one line.
//!
//! - `dictionary`: the Spanish to Portuguese word table
//! - `header`: locating the target column
//! - `skip`: cells that must not be touched
//! - `substitute`: word-by-word substitution of a cell
//! - `line`: splicing the cell back into its line

pub mod dictionary;
pub mod header;
pub mod line;
pub mod skip;
pub mod status;
pub mod substitute;

pub use dictionary::Dictionary;
pub use header::{locate_in_header, locate_target_column};
pub use line::{LineOutcome, LineParts, RewrittenLine, rewrite_line, split_line};
pub use skip::{SkipReason, should_skip, skip_reason};
pub use status::Status;
pub use substitute::{Translation, substitute_words, translate_cell};
