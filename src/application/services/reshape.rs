//! Pass-through services that reshape the stream without projecting it

use tracing::{debug, instrument};

use crate::application::{read_header, ApplicationError, ApplicationResult, StreamSummary};
use crate::domain::{resolve_columns, ColumnSelector, Row};
use crate::infrastructure::traits::{RowReader, RowWriter};

/// Copy every row, header included.
///
/// The first row is the header and is not counted in `rows_written`.
/// Empty input produces empty output.
#[instrument(level = "debug", skip(reader, writer))]
pub fn copy_rows(
    reader: &mut dyn RowReader,
    writer: &mut dyn RowWriter,
) -> ApplicationResult<StreamSummary> {
    let mut header = Row::new();
    if !reader.read_row(&mut header)? {
        debug!("empty input, nothing to copy");
        return Ok(StreamSummary::default());
    }
    writer.write_row(&header)?;
    let body = copy_body(reader, writer)?;
    Ok(StreamSummary {
        rows_written: body.rows_written,
        width: header.len(),
    })
}

/// Copy the remaining rows, counting each one.
fn copy_body(
    reader: &mut dyn RowReader,
    writer: &mut dyn RowWriter,
) -> ApplicationResult<StreamSummary> {
    let mut summary = StreamSummary::default();
    let mut row = Row::new();
    while reader.read_row(&mut row)? {
        writer.write_row(&row)?;
        summary.rows_written += 1;
        summary.width = row.len();
    }
    writer.flush()?;
    Ok(summary)
}

/// Write the header followed by at most `limit` data rows.
///
/// Stops reading as soon as the limit is reached.
#[instrument(level = "debug", skip(reader, writer))]
pub fn head_rows(
    reader: &mut dyn RowReader,
    writer: &mut dyn RowWriter,
    limit: u64,
) -> ApplicationResult<StreamSummary> {
    let header = read_header(reader)?;
    writer.write_row(&header)?;

    let mut summary = StreamSummary {
        rows_written: 0,
        width: header.len(),
    };
    let mut row = Row::new();
    while summary.rows_written < limit && reader.read_row(&mut row)? {
        writer.write_row(&row)?;
        summary.rows_written += 1;
    }
    writer.flush()?;
    Ok(summary)
}

/// Drop the first `count` rows (header included) and copy the rest.
///
/// Every remaining row counts as written, since none of them is a header.
#[instrument(level = "debug", skip(reader, writer))]
pub fn behead_rows(
    reader: &mut dyn RowReader,
    writer: &mut dyn RowWriter,
    count: u64,
) -> ApplicationResult<StreamSummary> {
    let mut row = Row::new();
    let mut skipped = 0;
    while skipped < count {
        if !reader.read_row(&mut row)? {
            debug!("input ended after {} rows", skipped);
            return Ok(StreamSummary::default());
        }
        skipped += 1;
    }
    copy_body(reader, writer)
}

/// Rename the selected header columns, copying data rows unchanged.
///
/// `names[i]` replaces the column that the i-th selector (after range
/// expansion) resolves to; a column selected twice takes the later name.
#[instrument(level = "debug", skip(reader, writer))]
pub fn rename_columns(
    reader: &mut dyn RowReader,
    writer: &mut dyn RowWriter,
    selectors: &[ColumnSelector],
    names: &[String],
) -> ApplicationResult<StreamSummary> {
    let header = read_header(reader)?;
    let current: Vec<&str> = header.iter().collect();
    let positions = resolve_columns(selectors, &current)?;
    if positions.len() != names.len() {
        return Err(ApplicationError::RenameCount {
            columns: positions.len(),
            names: names.len(),
        });
    }

    let mut renamed = current;
    for (&position, name) in positions.iter().zip(names) {
        renamed[position] = name.as_str();
    }
    writer.write_row(&Row::from(renamed))?;

    let body = copy_body(reader, writer)?;
    Ok(StreamSummary {
        rows_written: body.rows_written,
        width: header.len(),
    })
}
