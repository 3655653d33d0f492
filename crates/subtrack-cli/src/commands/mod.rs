//! Command handlers, one function per subcommand.

pub mod export;
pub mod init;
pub mod misc;
pub mod reports;
pub mod subscriptions;
