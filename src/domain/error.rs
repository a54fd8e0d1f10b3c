//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent column-spec and row-shape violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("empty column specification")]
    EmptySpec,

    #[error("invalid range: {token}")]
    InvalidRange { token: String },

    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("row {row} has {found} columns, expected {expected}")]
    WidthMismatch {
        row: u64,
        expected: usize,
        found: usize,
    },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
