use log::{LevelFilter, SetLoggerError};
use simple_logger::SimpleLogger;

/// Installs the process wide logger. Progress lines are not logged, only diagnostics are.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    SimpleLogger::new()
        .with_level(level)
        .without_timestamps()
        .init()
}
