use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level used when `SEABATTLE_LOG` is unset or unparsable. Anything chattier
/// would interleave with the game board on the console.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Parse a level name such as `debug`, falling back to [`DEFAULT_LEVEL`].
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Initialize logging with a level taken from the `SEABATTLE_LOG` environment variable.
pub fn init_logging() {
    let level = level_from(env::var("SEABATTLE_LOG").ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
