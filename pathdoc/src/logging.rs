//! Diagnostic logging to stderr.
//!
//! This is the operator-facing channel: warnings about configuration,
//! progress notes in verbose mode. The per-run record of fix actions lives
//! in [`crate::audit`] and mirrors its lines here at info level.
//!
//! Library internals additionally emit `log::debug!` records, which only
//! show up when the host installs a `log` backend.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "PATHDOC_LOG_MODE";

/// How chatty stderr output is.
///
/// # Examples
///
/// ```
/// use pathdoc::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Nothing but fatal errors reported by the caller.
    Quiet,
    /// Errors and warnings.
    #[default]
    Normal,
    /// Errors, warnings, info and debug messages.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        })
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Accepts `quiet`, `normal` or `verbose`, in any case.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathdoc::LogLevel;
    ///
    /// assert_eq!("VERBOSE".parse::<LogLevel>().unwrap(), LogLevel::Verbose);
    /// assert!("loud".parse::<LogLevel>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// Level-filtered stderr logger.
///
/// ```
/// use pathdoc::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("config file ignored");
/// logger.info("not printed below Verbose");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger at the given level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// True when informational messages are printed.
    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.level >= LogLevel::Verbose
    }

    /// Prints an error unless quiet.
    pub fn error(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("ERROR: {message}");
        }
    }

    /// Prints a warning unless quiet.
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("WARN: {message}");
        }
    }

    /// Prints an informational message in verbose mode.
    pub fn info(&self, message: &str) {
        if self.is_verbose() {
            eprintln!("INFO: {message}");
        }
    }

    /// Prints a debug message in verbose mode.
    pub fn debug(&self, message: &str) {
        if self.is_verbose() {
            eprintln!("DEBUG: {message}");
        }
    }
}

/// Picks the log level from CLI flags, then [`LOG_MODE_ENV`], then the
/// default.
///
/// `verbose` wins when both flags are set. An unparsable environment value
/// is ignored.
///
/// ```
/// use pathdoc::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    let level = env::var(LOG_MODE_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_default();
    Logger::new(level)
}
