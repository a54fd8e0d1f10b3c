//! Service container for dependency injection
//!
//! Wires settings and the input opener into row readers and writers.

use std::io::{Read, Write};
use std::sync::Arc;

use tracing::debug;

use crate::config::Settings;
use crate::infrastructure::csv_io::{CsvRowReader, CsvRowWriter};
use crate::infrastructure::inputs::resolve_inputs;
use crate::infrastructure::traits::{InputOpener, RealInputOpener};
use crate::infrastructure::{InfraError, InfraResult};

/// Container holding everything a command needs besides its arguments.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Input stream abstraction
    pub inputs: Arc<dyn InputOpener>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealInputOpener))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, inputs: Arc<dyn InputOpener>) -> Self {
        let settings = Arc::new(settings);

        Self { settings, inputs }
    }

    /// Open the single positional input using the configured delimiter.
    pub fn open_input(&self, args: &[String]) -> InfraResult<CsvRowReader<Box<dyn Read>>> {
        self.open_input_with(args, self.settings.input_delimiter())
    }

    /// Open the single positional input with an explicit delimiter.
    pub fn open_input_with(
        &self,
        args: &[String],
        delimiter: u8,
    ) -> InfraResult<CsvRowReader<Box<dyn Read>>> {
        let sources = resolve_inputs(args, 1)?;
        let source = &sources[0];
        debug!("opening input {}", source);
        let inner = self
            .inputs
            .open(source)
            .map_err(|e| InfraError::io(format!("open {}", source), e))?;
        Ok(CsvRowReader::new(inner, delimiter))
    }

    /// Row writer over `out` using the configured output delimiter.
    pub fn writer<'w>(&self, out: &'w mut dyn Write) -> CsvRowWriter<&'w mut dyn Write> {
        self.writer_with(out, self.settings.output_delimiter())
    }

    /// Row writer over `out` with an explicit delimiter.
    pub fn writer_with<'w>(
        &self,
        out: &'w mut dyn Write,
        delimiter: u8,
    ) -> CsvRowWriter<&'w mut dyn Write> {
        CsvRowWriter::new(out, delimiter)
    }
}
