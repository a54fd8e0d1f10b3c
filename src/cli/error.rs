//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("{0}")]
    Usage(String),

    /// Help text requested via `--help`; not a failure.
    #[error("{0}")]
    Help(String),

    #[error("must provide a valid subcommand")]
    MissingCommand,

    #[error("invalid subcommand \"{0}\"")]
    UnknownCommand(String),

    #[error("subcommand \"{0}\" registered twice")]
    DuplicateCommand(String),
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::Application(e.into())
    }
}

impl From<InfraError> for CliError {
    fn from(e: InfraError) -> Self {
        CliError::Application(e.into())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Help(_) => crate::exitcode::OK,
            CliError::Application(_)
            | CliError::Usage(_)
            | CliError::MissingCommand
            | CliError::UnknownCommand(_)
            | CliError::DuplicateCommand(_) => crate::exitcode::FAILURE,
        }
    }

    /// Whether the command listing should follow the error message.
    pub fn shows_usage(&self) -> bool {
        matches!(self, CliError::MissingCommand | CliError::UnknownCommand(_))
    }
}
