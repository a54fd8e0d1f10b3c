//! Domain layer: column specs, header resolution, row projection
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod projection;
pub mod resolver;
pub mod selector;

pub use error::{DomainError, DomainResult};
pub use projection::{ProjectionMode, RowProjector};
pub use resolver::resolve_columns;
pub use selector::{parse_column_spec, ColumnSelector};

/// One delimited record: the header or a data row.
pub type Row = csv::StringRecord;
