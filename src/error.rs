//! Typed errors for manifest conversion.
//!
//! Every variant is fatal for the whole run: a manifest that fails to
//! parse aborts the conversion instead of producing partial output.

use thiserror::Error;

/// A conversion failure, carrying the 1-based physical line number of
/// the offending record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Backslash escapes are only valid before a newline.
    #[error("line {line}: escaped character {found:?} is not a newline")]
    BadEscape { found: char, line: usize },

    /// Backslash as the very last character of the input.
    #[error("line {line}: dangling '\\' at end of input")]
    DanglingEscape { line: usize },

    /// A record whose second token is neither `standard` nor `optional`.
    #[error("line {line}: unexpected keyword '{keyword}'")]
    UnexpectedKeyword { keyword: String, line: usize },

    /// A record with a path but no requirement keyword at all.
    #[error("line {line}: '{path}' has no standard/optional keyword")]
    MissingKeyword { path: String, line: usize },

    /// A token in directive position outside the known directive set.
    #[error("line {line}: unknown directive '{directive}'")]
    UnknownDirective { directive: String, line: usize },

    /// An argument directive (or config keyword) with nothing after it.
    #[error("line {line}: '{directive}' is missing its argument")]
    MissingArgument { directive: String, line: usize },
}
