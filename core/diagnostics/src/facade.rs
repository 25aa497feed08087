//! FILENAME: core/diagnostics/src/facade.rs
// PURPOSE: Forwards `log` facade records into the unified sink.
// CONTEXT: Library crates log with `log::info!(target: "LABELS", ...)`; the target becomes the category.

use crate::{write_log, LogError};
use log::{Level, LevelFilter, Log, Metadata, Record};

struct UnifiedLogger;

static LOGGER: UnifiedLogger = UnifiedLogger;

fn level_code(level: Level) -> &'static str {
    match level {
        Level::Error => "E",
        Level::Warn => "W",
        Level::Info => "I",
        Level::Debug => "D",
        Level::Trace => "T",
    }
}

impl Log for UnifiedLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            write_log(
                level_code(record.level()),
                record.target(),
                &record.args().to_string(),
            );
        }
    }

    fn flush(&self) {}
}

/// Install the unified sink as the global `log` backend.
pub fn install_logger(max_level: LevelFilter) -> Result<(), LogError> {
    log::set_logger(&LOGGER).map_err(|_| LogError::AlreadyInstalled)?;
    log::set_max_level(max_level);
    Ok(())
}
