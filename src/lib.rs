//! es2pt - Spanish to Portuguese substitution for semicolon-delimited files
//!
//! es2pt is a CLI tool and library that rewrites the `SPANISH` column of
//! `;`-delimited files with a fixed word table, leaving every other byte of
//! each line untouched. Cells holding placeholders, bracketed codes or
//! escaped newlines are left alone.
//!
//! ## Module Structure
//!
//! - `batch`: Directory scan, per-file rewrite and run log
//! - `cli`: Command-line interface layer (commands and report printing)
//! - `config`: Configuration file loading and parsing
//! - `core`: Pure transforms (dictionary, column lookup, skip rules, substitution)

pub mod batch;
pub mod cli;
pub mod config;
pub mod core;
