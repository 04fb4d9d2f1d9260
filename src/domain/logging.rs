//! Structured logging shared by every layer.
//!
//! Code logs through the `log_*!` macros. A sink ([`Logger`]) and a
//! [`Clock`] are installed once at startup; until then entries go nowhere and
//! timestamps come from a counter, which keeps native tests quiet.

use derive_more::Display;
use std::fmt::{self, Formatter};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use strum::EnumString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Layer and unit an entry comes from, shown as `domain/Store`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LogComponent {
    #[display(fmt = "domain/{}", _0)]
    Domain(&'static str),
    #[display(fmt = "app/{}", _0)]
    Application(&'static str),
    #[display(fmt = "infra/{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "ui/{}", _0)]
    Presentation(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub at_ms: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: impl Into<String>) -> Self {
        Self {
            at_ms: clock().now_ms(),
            level,
            component,
            message: message.into(),
        }
    }

    /// `[time] LEVEL layer/unit | message`, level right-aligned.
    pub fn format_line(&self, time: &str) -> String {
        format!("[{}] {:>5} {} | {}", time, self.level, self.component, self.message)
    }
}

/// Destination for log entries.
pub trait Logger: Send + Sync {
    /// Checked before the message is formatted.
    fn enabled(&self, _level: LogLevel) -> bool {
        true
    }

    fn log(&self, entry: LogEntry);
}

/// Wall clock used to stamp entries.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
    fn format_ms(&self, at_ms: u64) -> String;
}

static LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();
static CLOCK: OnceLock<Box<dyn Clock>> = OnceLock::new();

/// Install the process-wide sink. Returns `false` if one was already set.
pub fn install_logger(logger: impl Logger + 'static) -> bool {
    LOGGER.set(Box::new(logger)).is_ok()
}

/// Install the process-wide clock. Returns `false` if one was already set.
pub fn install_clock(clock: impl Clock + 'static) -> bool {
    CLOCK.set(Box::new(clock)).is_ok()
}

pub fn logger() -> &'static dyn Logger {
    match LOGGER.get() {
        Some(logger) => logger.as_ref(),
        None => &Silent,
    }
}

pub fn clock() -> &'static dyn Clock {
    match CLOCK.get() {
        Some(clock) => clock.as_ref(),
        None => &TickClock,
    }
}

/// Build and send an entry if the installed logger wants `level`.
pub fn emit(level: LogLevel, component: LogComponent, message: impl FnOnce() -> String) {
    let sink = logger();
    if sink.enabled(level) {
        sink.log(LogEntry::new(level, component, message()));
    }
}

struct Silent;

impl Logger for Silent {
    fn enabled(&self, _level: LogLevel) -> bool {
        false
    }

    fn log(&self, _entry: LogEntry) {}
}

/// Stands in for a clock before one is installed.
struct TickClock;

impl Clock for TickClock {
    fn now_ms(&self) -> u64 {
        static TICKS: AtomicU64 = AtomicU64::new(0);
        TICKS.fetch_add(1, Ordering::Relaxed)
    }

    fn format_ms(&self, at_ms: u64) -> String {
        format!("#{}", at_ms)
    }
}

#[macro_export]
macro_rules! log_at {
    ($level:expr, $component:expr, $($arg:tt)*) => {
        $crate::domain::logging::emit($level, $component, || format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_trace {
    ($component:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::domain::logging::LogLevel::Trace, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::domain::logging::LogLevel::Debug, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::domain::logging::LogLevel::Info, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::domain::logging::LogLevel::Warn, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::domain::logging::LogLevel::Error, $component, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn level_parses_case_insensitively() {
        assert_eq!(LogLevel::from_str("debug").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn line_pads_the_level() {
        let entry = LogEntry {
            at_ms: 0,
            level: LogLevel::Info,
            component: LogComponent::Domain("Store"),
            message: "window set".to_string(),
        };
        assert_eq!(entry.format_line("t"), "[t]  INFO domain/Store | window set");
    }

    #[test]
    fn nothing_is_enabled_before_install() {
        assert!(!logger().enabled(LogLevel::Error));
        emit(LogLevel::Error, LogComponent::Domain("Test"), || unreachable!());
    }
}
