//! Output formatting functions.
//!
//! `--format json` prints the API payload as-is; `--format pretty` uses the
//! layouts in [`pretty`].

pub mod json;
pub mod pretty;

use crate::cli::OutputFormat;

pub use pretty::Pretty;

/// Format a value for output.
pub fn format_output<T: serde::Serialize + Pretty>(value: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => value.pretty(),
    }
}
