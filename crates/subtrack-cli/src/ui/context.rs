//! Terminal detection and the per-command rendering context.

use std::io::IsTerminal;

use crate::cli::FormatArg;
use crate::constants::DEFAULT_CURRENCY;

use super::OutputMode;

/// Everything a renderer needs to know about where its output goes.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether stdout is a TTY
    pub is_tty: bool,
    pub color: bool,
    pub unicode: bool,
    /// Terminal width in columns
    pub width: usize,
    pub mode: OutputMode,
    /// Symbol printed in front of amounts
    pub currency: String,
}

impl UiContext {
    /// Detect the environment and apply the global flags.
    ///
    /// Color is off when stdout is not a terminal, `NO_COLOR` is set,
    /// `TERM=dumb`, or `--no-color` was passed.
    pub fn from_env(
        json_flag: bool,
        format: Option<FormatArg>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var_os("NO_COLOR").is_some();

        Self {
            is_tty,
            color: is_tty && !no_color_flag && !no_color_env && !term_is_dumb,
            unicode: !ascii_flag,
            width: terminal_width().unwrap_or(80),
            mode: OutputMode::resolve(json_flag, format, is_tty, term_is_dumb),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    pub fn with_currency(mut self, currency: &str) -> Self {
        self.currency = currency.to_string();
        self
    }

    /// Interactive prompts need both ends attached to a terminal.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && std::io::stdin().is_terminal()
    }
}

fn terminal_width() -> Option<usize> {
    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 {
                return Some(width);
            }
        }
    }

    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;

        let mut winsize = MaybeUninit::<libc::winsize>::uninit();
        // SAFETY: TIOCGWINSZ only writes into the provided winsize struct.
        let result =
            unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
        if result == 0 {
            // SAFETY: ioctl succeeded, so the struct was filled in.
            let ws = unsafe { winsize.assume_init() };
            if ws.ws_col > 0 {
                return Some(ws.ws_col as usize);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag_selects_json() {
        let ctx = UiContext::from_env(true, None, false, false);
        assert_eq!(ctx.mode, OutputMode::Json);
    }

    #[test]
    fn test_flags_disable_color_and_unicode() {
        let ctx = UiContext::from_env(false, None, true, true);
        assert!(!ctx.color);
        assert!(!ctx.unicode);
        assert!(ctx.width > 0);
    }

    #[test]
    fn test_currency_defaults_and_overrides() {
        let ctx = UiContext::from_env(false, None, false, false);
        assert_eq!(ctx.currency, "$");
        assert_eq!(ctx.with_currency("€").currency, "€");
    }
}
