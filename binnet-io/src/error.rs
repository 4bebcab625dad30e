//! I/O error types.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for I/O operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading a dataset or writing a report.
#[derive(Error, Debug)]
pub enum Error {
    /// File could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file could not be read or is not valid UTF-8.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row does not have the expected number of fields.
    #[error("line {line} of {}: expected {expected} fields, found {found}", path.display())]
    ColumnCount {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Report output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
