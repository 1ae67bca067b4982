//! Logger setup for the command-line shell.

use std::io::Write;

use env_logger::{fmt::Formatter, Builder, Target, WriteStyle};
use log::{Level, LevelFilter};

use crate::{Error, Result};

/// Installs a compact stderr logger: `LEVEL message`, optionally prefixed
/// with a millisecond timestamp.
///
/// Fails if a global logger is already installed.
pub fn init_logger(level: LevelFilter, timestamp: bool) -> Result<()> {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .write_style(WriteStyle::Never)
        .target(Target::Stderr)
        .format(move |buf: &mut Formatter, record| {
            if timestamp {
                write!(buf, "{} ", buf.timestamp_millis())?;
            }
            writeln!(buf, "{} {}", level_tag(record.level()), record.args())
        });

    builder
        .try_init()
        .map_err(|e| Error::Logger(e.to_string()))
}

/// Log level for the shell's `--quiet` / `--verbose` flags.
pub fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    match (quiet, verbose) {
        (_, true) => LevelFilter::Debug,
        (true, false) => LevelFilter::Warn,
        (false, false) => LevelFilter::Info,
    }
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
