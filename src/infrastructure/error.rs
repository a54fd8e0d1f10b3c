//! Infrastructure-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;

/// Infrastructure errors wrap domain errors and add I/O-level concerns.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("I/O error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {context}: {source}")]
    Csv {
        context: String,
        #[source]
        source: csv::Error,
    },

    #[error("expected {expected} input file(s), got {found}")]
    Arity { expected: usize, found: usize },
}

impl InfraError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a csv error with context.
    ///
    /// Unequal record lengths surface as `DomainError::WidthMismatch` so
    /// every reader reports ragged input the same way.
    pub fn csv(context: impl Into<String>, source: csv::Error) -> Self {
        if let csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } = source.kind()
        {
            // record 0 is the header, so the record index is the data row number
            let row = pos.as_ref().map(|p| p.record()).unwrap_or_default();
            return Self::Domain(DomainError::WidthMismatch {
                row,
                expected: *expected_len as usize,
                found: *len as usize,
            });
        }
        Self::Csv {
            context: context.into(),
            source,
        }
    }
}

/// Result type for infrastructure layer operations.
pub type InfraResult<T> = Result<T, InfraError>;
