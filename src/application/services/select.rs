//! Column selection service
//!
//! Resolves the selectors against the header, then streams every row through
//! one `RowProjector`. Resolution finishes before the first write, so a bad
//! column spec produces no output at all.

use tracing::{debug, instrument};

use crate::application::{read_header, ApplicationResult, StreamSummary};
use crate::domain::{resolve_columns, ColumnSelector, ProjectionMode, Row, RowProjector};
use crate::infrastructure::traits::{RowReader, RowWriter};

/// Stream `reader` to `writer` keeping (or dropping) the selected columns.
#[instrument(level = "debug", skip(reader, writer))]
pub fn select_columns(
    reader: &mut dyn RowReader,
    writer: &mut dyn RowWriter,
    selectors: &[ColumnSelector],
    mode: ProjectionMode,
) -> ApplicationResult<StreamSummary> {
    let header = read_header(reader)?;
    let names: Vec<&str> = header.iter().collect();
    let positions = resolve_columns(selectors, &names)?;
    let mut projector = RowProjector::new(mode, positions, header.len());

    writer.write_row(&projector.project_header(&header)?)?;

    let mut row = Row::new();
    let mut out = Row::with_capacity(0, projector.output_width());
    while reader.read_row(&mut row)? {
        projector.project(&row, &mut out)?;
        writer.write_row(&out)?;
    }
    writer.flush()?;

    debug!(
        "selected {} of {} columns over {} rows",
        projector.output_width(),
        projector.input_width(),
        projector.rows_seen()
    );
    Ok(StreamSummary {
        rows_written: projector.rows_seen(),
        width: projector.output_width(),
    })
}
