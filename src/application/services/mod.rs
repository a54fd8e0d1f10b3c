//! Application services
//!
//! Streaming passes that orchestrate domain logic. Services depend on the
//! row I/O traits (RowReader, RowWriter) and never on concrete dialects.

mod inspect;
mod reshape;
mod select;

pub use inspect::{count_dimensions, list_headers, Dimensions};
pub use reshape::{behead_rows, copy_rows, head_rows, rename_columns};
pub use select::select_columns;
