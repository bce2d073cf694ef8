//! Error types for the catalog processor library.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when reading catalogs or writing reports.
///
/// Malformed individual fields are never reported here: they resolve to
/// sentinel values on the record instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The input does not follow the catalog layout (e.g., missing or non-numeric count line)
    #[error("Invalid catalog format: {0}")]
    InvalidFormat(String),

    /// The input ended before the declared number of records was read
    #[error("Input ended after {found} of {expected} declared {kind} record(s)")]
    StreamExhausted {
        kind: &'static str,
        expected: usize,
        found: usize,
    },

    /// I/O error occurred while reading input or writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization error
    #[error("Output error: {0}")]
    OutputError(#[from] serde_json::Error),
}
