//! Diagnostic logging to stderr, filtered by `SUBTRACK_LOG`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::constants::LOG_ENV;

/// Install the global subscriber.
///
/// `SUBTRACK_LOG` takes any `EnvFilter` directive; without it the level is
/// `warn`, or `debug` when `--verbose` is passed.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
