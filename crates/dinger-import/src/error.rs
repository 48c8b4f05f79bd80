//! Error types for the dinger-import reader.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
  /// The source file is missing or not readable as CSV.
  #[error("cannot read import source: {0}")]
  Source(#[from] csv::Error),

  #[error("import source is missing required column {0}")]
  MissingColumn(&'static str),

  /// A value of the wrong type (or absent) in an otherwise well-formed row.
  /// Any such row aborts the entire import; there is no partial-row skip.
  #[error("line {line}, column {column}: {message}")]
  InvalidField {
    line:    usize,
    column:  &'static str,
    message: String,
  },

  #[error("store error: {0}")]
  Store(Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = ImportError> = std::result::Result<T, E>;
