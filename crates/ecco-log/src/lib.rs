//! Leveled diagnostic logging for the Ecco toolchain.
//!
//! Records are written to **stderr** so that diagnostics never interleave with
//! the output an evaluated Ecco program writes to stdout. Each record carries
//! the module path of the call site.
//!
//! # Example
//!
//! ```
//! use ecco_log::{debug, info, trace, Level};
//!
//! ecco_log::set_level(Level::Debug);
//!
//! let nodes = 3;
//! info!("built tree with {} nodes", nodes);
//! debug!("slots: {:?}", [0, 1, 2]);
//! trace!("hidden below Debug");
//! ```

use std::env;
use std::fmt::{self, Arguments};
use std::str::FromStr;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Environment variable read by [`init_from_env`] for the minimum level.
pub const LEVEL_ENV: &str = "ECCO_LOG";

/// Environment variable that disables colored output when present.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Severity of a log record.
///
/// Lower numeric values are more severe, so `Error < Trace`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Unrecoverable failures
    Error = 0,
    /// Suspicious but recoverable situations
    Warn = 1,
    /// High-level progress
    Info = 2,
    /// Detailed diagnostics
    Debug = 3,
    /// Per-node construction noise
    Trace = 4,
}

impl Level {
    const fn color_code(self) -> &'static str {
        match self {
            Level::Error => "\x1b[31m",
            Level::Warn => "\x1b[33m",
            Level::Info => "\x1b[32m",
            Level::Debug => "\x1b[36m",
            Level::Trace => "\x1b[35m",
        }
    }

    /// Upper-case name used in rendered records.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Level::Error,
            1 => Level::Warn,
            2 => Level::Info,
            3 => Level::Debug,
            _ => Level::Trace,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a level name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    input: String,
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid log level '{}'", self.input)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses a level name, ignoring ASCII case.
    ///
    /// ```
    /// use ecco_log::Level;
    ///
    /// assert_eq!("debug".parse::<Level>(), Ok(Level::Debug));
    /// assert_eq!("WARN".parse::<Level>(), Ok(Level::Warn));
    /// assert!("loud".parse::<Level>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = match s.trim().to_ascii_lowercase().as_str() {
            "error" => Level::Error,
            "warn" | "warning" => Level::Warn,
            "info" => Level::Info,
            "debug" => Level::Debug,
            "trace" => Level::Trace,
            _ => {
                return Err(ParseLevelError {
                    input: s.to_string(),
                });
            }
        };
        Ok(level)
    }
}

/// Level filter and output switches shared by every log macro.
pub struct Logger {
    level: AtomicU8,
    color: AtomicBool,
}

impl Logger {
    const fn new(level: Level) -> Self {
        Logger {
            level: AtomicU8::new(level as u8),
            color: AtomicBool::new(true),
        }
    }

    /// Sets the minimum level that is emitted.
    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::SeqCst);
    }

    /// Returns the minimum level that is emitted.
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Whether a record at `level` passes the filter.
    pub fn enabled(&self, level: Level) -> bool {
        level as u8 <= self.level.load(Ordering::Relaxed)
    }

    /// Enables or disables ANSI colors.
    pub fn set_color(&self, on: bool) {
        self.color.store(on, Ordering::SeqCst);
    }

    /// Whether ANSI colors are written.
    pub fn color(&self) -> bool {
        self.color.load(Ordering::Relaxed)
    }

    fn render(&self, level: Level, target: &str, args: Arguments) -> String {
        const RESET: &str = "\x1b[0m";

        if self.color() {
            format!("{}[{level}]{RESET} {target}: {args}", level.color_code())
        } else {
            format!("[{level}] {target}: {args}")
        }
    }
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Returns the process-wide logger, created at `Level::Info` on first use.
pub fn get_logger() -> &'static Logger {
    LOGGER.get_or_init(|| Logger::new(Level::Info))
}

/// Sets the minimum level of the global logger.
pub fn set_level(level: Level) {
    get_logger().set_level(level);
}

/// Parses `s` and sets it as the minimum level of the global logger.
///
/// ```
/// ecco_log::set_level_from_str("trace").unwrap();
/// assert_eq!(ecco_log::get_logger().level(), ecco_log::Level::Trace);
/// ```
pub fn set_level_from_str(s: &str) -> Result<(), ParseLevelError> {
    set_level(s.parse()?);
    Ok(())
}

/// Enables or disables colored output of the global logger.
pub fn set_color(on: bool) {
    get_logger().set_color(on);
}

/// Configures the global logger from `ECCO_LOG` and `NO_COLOR`.
///
/// Intended for drivers; library code never calls this. An unset `ECCO_LOG`
/// leaves the level untouched, an unparsable one is reported as an error.
pub fn init_from_env() -> Result<(), ParseLevelError> {
    let level = env::var(LEVEL_ENV).ok();
    let no_color = env::var_os(NO_COLOR_ENV).is_some();
    apply_settings(get_logger(), level.as_deref(), no_color)
}

fn apply_settings(
    logger: &Logger,
    level: Option<&str>,
    no_color: bool,
) -> Result<(), ParseLevelError> {
    if no_color {
        logger.set_color(false);
    }
    if let Some(name) = level {
        logger.set_level(name.parse()?);
    }
    Ok(())
}

#[doc(hidden)]
pub fn __log_with_target(level: Level, target: &str, args: Arguments) {
    let logger = get_logger();
    if !logger.enabled(level) {
        return;
    }
    eprintln!("{}", logger.render(level, target, args));
}

/// Emits a record at an explicit level.
///
/// ```
/// use ecco_log::{log, Level};
///
/// log!(level: Level::Warn, "slot {} left empty", 2);
/// ```
#[macro_export]
macro_rules! log {
    (level: $level:expr, $($arg:tt)*) => {
        {
            if $crate::get_logger().enabled($level) {
                $crate::__log_with_target(
                    $level,
                    module_path!(),
                    format_args!($($arg)*)
                );
            }
        }
    };
}

/// Emits a record at `Level::Error`.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Error, $($arg)*)
    };
}

/// Emits a record at `Level::Warn`.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Warn, $($arg)*)
    };
}

/// Emits a record at `Level::Info`.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Info, $($arg)*)
    };
}

/// Emits a record at `Level::Debug`.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Debug, $($arg)*)
    };
}

/// Emits a record at `Level::Trace`.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Trace, $($arg)*)
    };
}
