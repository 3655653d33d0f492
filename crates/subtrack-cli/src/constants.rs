//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (subscription id).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// The data directory or an export target could not be written.
    pub const STORAGE: i32 = 5;
}

/// Directory name used under the XDG config and data roots.
pub const APP_DIR: &str = "subtrack";

/// Currency symbol used when the config does not set one.
pub const DEFAULT_CURRENCY: &str = "$";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "SUBTRACK_LOG";
