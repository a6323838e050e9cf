#![cfg(feature = "std")]

use std::boxed::Box;
use std::env;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level, e.g. `SALVO_LOG=debug`.
pub const LOG_ENV: &str = "SALVO_LOG";

/// Writes records to stderr, tagged with their level and module, so the
/// narrated game on stdout is never interleaved with diagnostics.
struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level named by `SALVO_LOG`, `info` when
/// unset or unparsable. Calling it again is harmless.
pub fn init_logging() {
    let level = parse_level(env::var(LOG_ENV).ok().as_deref());
    if log::set_boxed_logger(Box::new(StderrLogger { level })).is_ok() {
        log::set_max_level(level);
    }
}
