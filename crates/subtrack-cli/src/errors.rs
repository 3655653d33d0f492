//! CLI error types for structured error handling.
//!
//! Handlers return `anyhow::Result`; errors that should leave with a
//! specific exit code are raised as `CliError` (or arrive as a core
//! `SubtrackError`) and classified in `exit_code_for`.

use std::fmt;

use subtrack_core::SubtrackError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (subscription id)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// Data could not be persisted or written out
    Storage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::InvalidInput(message) | CliError::Storage(message) => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Create a Storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        CliError::Storage(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::Storage(_) => exit_codes::STORAGE,
        }
    }
}

/// Pick the process exit code for an error leaving `run`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<SubtrackError>() {
        Some(SubtrackError::Validation(_)) | Some(SubtrackError::InvalidInput(_)) => {
            exit_codes::INVALID_INPUT
        }
        Some(SubtrackError::Storage(_)) | Some(SubtrackError::Serialization(_)) => {
            exit_codes::STORAGE
        }
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_codes() {
        assert_eq!(CliError::not_found("x", "y").exit_code(), exit_codes::NOT_FOUND);
        assert_eq!(CliError::invalid_input("x").exit_code(), exit_codes::INVALID_INPUT);
        assert_eq!(CliError::storage("x").exit_code(), exit_codes::STORAGE);
    }

    #[test]
    fn test_core_errors_are_classified() {
        let err = anyhow::Error::new(SubtrackError::Validation("short".into()));
        assert_eq!(exit_code_for(&err), exit_codes::INVALID_INPUT);

        let err = anyhow::Error::new(SubtrackError::Storage("disk".into()));
        assert_eq!(exit_code_for(&err), exit_codes::STORAGE);

        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&err), 1);
    }

    #[test]
    fn test_not_found_display_includes_hint() {
        let err = CliError::not_found("Subscription 9 not found", "Hint: run list");
        assert_eq!(err.to_string(), "Subscription 9 not found\nHint: run list");
    }
}
