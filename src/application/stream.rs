//! Shared stream helpers

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::Row;
use crate::infrastructure::traits::RowReader;

/// What a streaming pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    /// Data rows written, header excluded
    pub rows_written: u64,
    /// Width of every written row
    pub width: usize,
}

/// Read the header row, which must precede all data rows.
pub fn read_header(reader: &mut dyn RowReader) -> ApplicationResult<Row> {
    let mut header = Row::new();
    if !reader.read_row(&mut header)? {
        return Err(ApplicationError::MissingHeader);
    }
    Ok(header)
}
