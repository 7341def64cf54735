#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} {} - {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "SEABATTLE_LOG";

/// Initialize logging with a level taken from [`LOG_ENV`].
/// Defaults to `warn` if the variable is not set or invalid, keeping game
/// output on stdout uncluttered.
pub fn init_logging() {
    let requested = env::var(LOG_ENV).ok();
    let level = requested
        .as_deref()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
        log::debug!("{}={:?}, logging at {}", LOG_ENV, requested, level);
    }
}
