use std::collections::HashMap;
use std::env;
use std::io::{self, Cursor, Read};
use std::sync::Once;

use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::Row;
use crate::infrastructure::traits::{InputOpener, InputSource, RowReader, RowWriter};
use crate::infrastructure::InfraResult;

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "trace");
        }
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Build rows from string slices.
pub fn rows(data: &[&[&str]]) -> Vec<Row> {
    data.iter().map(|cells| Row::from(cells.to_vec())).collect()
}

/// Cells of each row as owned strings, for assertions.
pub fn cells(rows: &[Row]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(String::from).collect())
        .collect()
}

/// Row reader over an in-memory list; optionally fails after the last row.
#[derive(Debug, Default)]
pub struct MemoryRowReader {
    rows: std::vec::IntoIter<Row>,
    fail_at_end: bool,
}

impl MemoryRowReader {
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows: rows.into_iter(),
            fail_at_end: false,
        }
    }

    /// Return an I/O failure instead of end-of-stream.
    pub fn failing(rows: Vec<Row>) -> Self {
        Self {
            rows: rows.into_iter(),
            fail_at_end: true,
        }
    }
}

impl RowReader for MemoryRowReader {
    fn read_row(&mut self, row: &mut Row) -> InfraResult<bool> {
        match self.rows.next() {
            Some(next) => {
                *row = next;
                Ok(true)
            }
            None if self.fail_at_end => Err(crate::infrastructure::InfraError::io(
                "read record",
                io::Error::new(io::ErrorKind::UnexpectedEof, "stream broke"),
            )),
            None => Ok(false),
        }
    }
}

/// Row writer collecting rows in memory.
#[derive(Debug, Default)]
pub struct MemoryRowWriter {
    pub rows: Vec<Row>,
    pub flushes: usize,
}

impl RowWriter for MemoryRowWriter {
    fn write_row(&mut self, row: &Row) -> InfraResult<()> {
        self.rows.push(row.clone());
        self.flushes += 1;
        Ok(())
    }

    fn flush(&mut self) -> InfraResult<()> {
        Ok(())
    }
}

/// Input opener serving fixed contents; stdin maps to the `-` key.
#[derive(Debug, Default)]
pub struct MemoryInputOpener {
    files: HashMap<String, String>,
}

impl MemoryInputOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: &str, content: &str) -> Self {
        self.files.insert(name.to_string(), content.to_string());
        self
    }

    pub fn with_stdin(self, content: &str) -> Self {
        self.with_file("-", content)
    }
}

impl InputOpener for MemoryInputOpener {
    fn open(&self, source: &InputSource) -> io::Result<Box<dyn Read>> {
        let key = match source {
            InputSource::Stdin => "-".to_string(),
            InputSource::Path(path) => path.to_string_lossy().into_owned(),
        };
        match self.files.get(&key) {
            Some(content) => Ok(Box::new(Cursor::new(content.clone().into_bytes()))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", key),
            )),
        }
    }
}

// test
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_setup() {
        init_test_setup();
    }

    #[test]
    fn test_memory_reader_signals_end_and_failure() {
        let mut row = Row::new();
        let mut reader = MemoryRowReader::new(rows(&[&["a"]]));
        assert!(reader.read_row(&mut row).unwrap());
        assert!(!reader.read_row(&mut row).unwrap());

        let mut failing = MemoryRowReader::failing(vec![]);
        assert!(failing.read_row(&mut row).is_err());
    }
}
