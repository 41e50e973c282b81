//! `log` facade backend
//!
//! Records go out on the console as `[LEVEL] target: message`, with the
//! level tag colored when color output is enabled.

use core::fmt::{self, Write};

use disco_common::{ConsoleError, ConsoleResult, TermColor};
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::console::Console;
use crate::stdio::Stdout;

pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Route the `log` macros to the process-wide console
pub fn init_logger(level: LevelFilter) -> ConsoleResult<()> {
    log::set_logger(&LOGGER).map_err(|_| ConsoleError::Logger)?;
    log::set_max_level(level);
    Ok(())
}

fn level_color(level: Level) -> TermColor {
    match level {
        Level::Error => TermColor::Red,
        Level::Warn => TermColor::Yellow,
        Level::Info => TermColor::Green,
        Level::Debug => TermColor::Cyan,
        Level::Trace => TermColor::White,
    }
}

pub(crate) fn write_record(console: &Console, record: &Record) -> fmt::Result {
    writeln!(
        Stdout(console),
        "[{}{:<5}{}] {}: {}",
        console.color(level_color(record.level())),
        record.level(),
        console.color(TermColor::None),
        record.target(),
        record.args()
    )
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Some(console) = crate::console() {
            let _ = write_record(console, record);
        }
    }

    fn flush(&self) {}
}
