#![cfg(feature = "std")]

use log::{LevelFilter, Metadata, Record};
use std::env;

/// Environment variable consulted when no level is given on the command line.
pub const LOG_ENV_VAR: &str = "SEABATTLE_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Pick the log level: explicit `cli` value, then a parseable `env` value,
/// then `info`.
pub fn resolve_level(cli: Option<LevelFilter>, env: Option<&str>) -> LevelFilter {
    cli.or_else(|| env.and_then(|lvl| lvl.trim().parse().ok()))
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger. Returns the level in effect.
pub fn init_logging(cli: Option<LevelFilter>) -> LevelFilter {
    let env_level = env::var(LOG_ENV_VAR).ok();
    let level = resolve_level(cli, env_level.as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
    level
}
