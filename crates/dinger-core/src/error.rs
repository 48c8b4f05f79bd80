//! Error types for `dinger-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A sort parameter named a column outside the enumerated allow-list.
  /// Rejected before any query is built; user input never reaches SQL text.
  #[error("invalid sort column: {0:?}")]
  InvalidSortColumn(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
