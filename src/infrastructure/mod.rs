//! Infrastructure layer: row I/O implementations and DI container
//!
//! This layer implements I/O boundary traits and wires up services.

pub mod csv_io;
pub mod di;
pub mod error;
pub mod inputs;
pub mod traits;

pub use error::{InfraError, InfraResult};
