//! Error types for the data-loader crate.

use thiserror::Error;

/// Errors that can occur while loading and parsing the play log.
///
/// Every parse failure carries enough context (file, 1-based line number)
/// to point at the exact record that aborted the batch.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// I/O error occurred while reading the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Line in the play log couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// Expected number of fields in a line doesn't match actual
    #[error("Expected {expected} fields but found {found} at line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
