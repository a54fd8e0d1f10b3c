//! I/O boundary traits for testability
//!
//! These traits abstract row streams and input opening, allowing services
//! to be tested with in-memory implementations.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::domain::Row;
use crate::infrastructure::InfraResult;

/// Sequential row source. The first row read is the header.
pub trait RowReader {
    /// Read the next row into `row`.
    ///
    /// Returns `Ok(true)` when a row was read and `Ok(false)` at end of stream.
    fn read_row(&mut self, row: &mut Row) -> InfraResult<bool>;
}

/// Sequential row sink.
pub trait RowWriter {
    /// Write one row and flush it through to the underlying sink.
    fn write_row(&mut self, row: &Row) -> InfraResult<()>;

    /// Flush buffered output.
    fn flush(&mut self) -> InfraResult<()>;
}

/// Where one input stream comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Path(PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Opens raw byte streams for input sources.
pub trait InputOpener: Send + Sync {
    fn open(&self, source: &InputSource) -> io::Result<Box<dyn Read>>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Opens files from disk and reads stdin.
#[derive(Debug, Default)]
pub struct RealInputOpener;

impl InputOpener for RealInputOpener {
    fn open(&self, source: &InputSource) -> io::Result<Box<dyn Read>> {
        match source {
            InputSource::Stdin => Ok(Box::new(io::stdin())),
            InputSource::Path(path) => Ok(Box::new(File::open(path)?)),
        }
    }
}
