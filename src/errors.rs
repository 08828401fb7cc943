//! Typed errors for dataset loading.
//!
//! Interactive input never produces an error: invalid entries are handled by
//! re-prompting. Errors here cover the only fatal path, reading and parsing
//! the city CSV file, and are propagated up to `main` through `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    /// The city file could not be opened or read.
    #[error("failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV structure itself is broken (not a row-level problem).
    #[error("failed to parse dataset {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A required column is missing from the header row.
    #[error("dataset {path:?} is missing required column {column:?}")]
    MissingColumn { path: PathBuf, column: &'static str },
}
