//! CLI-level errors (wraps generator errors)

use thiserror::Error;

use crate::errors::GeneratorError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Generator(#[from] GeneratorError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Generator(e) => match e {
                GeneratorError::InvalidParameter { .. } => crate::exitcode::USAGE,
                GeneratorError::IncompleteParameters => crate::exitcode::USAGE,
                GeneratorError::Io(_) => crate::exitcode::IOERR,
            },
        }
    }
}
