//! csv-backed `RowReader` / `RowWriter`

use std::io::{Read, Write};

use crate::domain::Row;
use crate::infrastructure::traits::{RowReader, RowWriter};
use crate::infrastructure::{InfraError, InfraResult};

/// Reads delimited records; the header is returned as the first row.
pub struct CsvRowReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CsvRowReader<R> {
    pub fn new(inner: R, delimiter: u8) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(false)
            .delimiter(delimiter)
            .from_reader(inner);
        Self { reader }
    }
}

impl<R: Read> RowReader for CsvRowReader<R> {
    fn read_row(&mut self, row: &mut Row) -> InfraResult<bool> {
        self.reader
            .read_record(row)
            .map_err(|e| InfraError::csv("read record", e))
    }
}

/// Writes delimited records, flushing after every row.
pub struct CsvRowWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvRowWriter<W> {
    pub fn new(inner: W, delimiter: u8) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(inner);
        Self { writer }
    }
}

impl<W: Write> RowWriter for CsvRowWriter<W> {
    fn write_row(&mut self, row: &Row) -> InfraResult<()> {
        if row.is_empty() {
            // csv writes a zero-field record as `""`, which reads back as one
            // empty cell; a zero-width row is a bare line terminator instead
            self.flush()?;
            let inner = self.writer.get_mut();
            return inner
                .write_all(b"\n")
                .and_then(|_| inner.flush())
                .map_err(|e| InfraError::io("write record", e));
        }
        self.writer
            .write_record(row)
            .map_err(|e| InfraError::csv("write record", e))?;
        self.flush()
    }

    fn flush(&mut self) -> InfraResult<()> {
        self.writer
            .flush()
            .map_err(|e| InfraError::io("flush output", e))
    }
}
