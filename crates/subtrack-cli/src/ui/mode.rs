//! Output mode routing logic.

use crate::cli::FormatArg;

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Plain `key=value` text, stable for logs and scripts
    #[default]
    Plain,
    /// Human-friendly tables with colors (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// Routing rules:
    /// 1. `--json` overrides everything
    /// 2. `--format plain` forces plain
    /// 3. `TERM=dumb` forces plain
    /// 4. Otherwise pretty on a TTY, plain when piped
    pub fn resolve(
        json_flag: bool,
        format: Option<FormatArg>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }
        if format == Some(FormatArg::Plain) || term_is_dumb {
            return Self::Plain;
        }
        if is_tty {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
