//! CLI layer: command registry, argument parsing and dispatch

pub mod args;
pub mod commands;
pub mod error;
pub mod output;
pub mod registry;

pub use commands::{default_registry, execute};
pub use error::{CliError, CliResult};
pub use registry::{Command, CommandRegistry, Invocation};
