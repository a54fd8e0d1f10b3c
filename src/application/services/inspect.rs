//! Read-only inspection of a stream's shape

use tracing::instrument;

use crate::application::{read_header, ApplicationResult};
use crate::domain::Row;
use crate::infrastructure::traits::RowReader;

/// Row and column counts of one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Data rows, header excluded
    pub rows: u64,
    pub columns: usize,
}

/// Header names in column order.
#[instrument(level = "debug", skip(reader))]
pub fn list_headers(reader: &mut dyn RowReader) -> ApplicationResult<Vec<String>> {
    let header = read_header(reader)?;
    Ok(header.iter().map(String::from).collect())
}

/// Count data rows and header columns in a single pass.
#[instrument(level = "debug", skip(reader))]
pub fn count_dimensions(reader: &mut dyn RowReader) -> ApplicationResult<Dimensions> {
    let header = read_header(reader)?;
    let mut row = Row::new();
    let mut rows = 0;
    while reader.read_row(&mut row)? {
        rows += 1;
    }
    Ok(Dimensions {
        rows,
        columns: header.len(),
    })
}
