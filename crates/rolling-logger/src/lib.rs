//! Rolling Logger
//!
//! A `log::Log` backend that keeps the most recent lines in a circular buffer
//! and forwards every line to a pluggable sink (console, stderr, ...).

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Where formatted lines go after being buffered
pub type Sink = fn(Level, &str);

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 500;

/// Circular-buffer logger
pub struct RollingLogger {
    capacity: usize,
    level: LevelFilter,
    sink: Option<Sink>,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(capacity: usize, level: LevelFilter, sink: Option<Sink>) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            level,
            sink,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn push(&self, line: String) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

/// Format a record as `<timestamp> <LEVEL> <target>: <message>`
pub fn format_line(record: &Record) -> String {
    format!(
        "{} {} {}: {}",
        chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record);
        if let Some(sink) = self.sink {
            sink(record.level(), &line);
        }
        self.push(line);
    }

    fn flush(&self) {}
}

/// Install a leaked `RollingLogger` as the global logger.
///
/// Returns the installed instance so callers can read `recent()` later.
pub fn init(
    capacity: usize,
    level: LevelFilter,
    sink: Option<Sink>,
) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger: &'static RollingLogger = Box::leak(Box::new(RollingLogger::new(capacity, level, sink)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &RollingLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", msg))
                .build(),
        );
    }

    #[test]
    fn test_evicts_oldest_beyond_capacity() {
        let logger = RollingLogger::new(2, LevelFilter::Trace, None);
        emit(&logger, Level::Info, "one");
        emit(&logger, Level::Info, "two");
        emit(&logger, Level::Info, "three");

        let lines = logger.recent();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("test: two"));
        assert!(lines[1].ends_with("test: three"));
    }

    #[test]
    fn test_filters_below_level() {
        let logger = RollingLogger::new(10, LevelFilter::Warn, None);
        emit(&logger, Level::Debug, "hidden");
        emit(&logger, Level::Error, "shown");

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR"));
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let logger = RollingLogger::new(0, LevelFilter::Info, None);
        assert_eq!(logger.capacity(), 1);
        emit(&logger, Level::Info, "a");
        emit(&logger, Level::Info, "b");
        assert_eq!(logger.recent().len(), 1);
    }
}
