use common::UnknownName;
use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComputeError {
    /// A name that maps to no known field, report or time frame
    #[error(transparent)]
    UnknownName(#[from] UnknownName),

    /// Grouping requested on a column the source table does not have
    #[error("table '{table}' has no column '{field}'")]
    FieldNotInTable { table: &'static str, field: &'static str },

    /// Currency code not in the ISO table
    #[error("unknown currency code: {0}")]
    Currency(String),
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
