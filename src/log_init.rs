use log::{Level, LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Appends each record to a file as `[LEVEL] target: message`.
///
/// The file is reopened for every record. Write failures are dropped.
struct FileLogger {
    path: PathBuf,
    level: Level,
}

impl FileLogger {
    fn write_record(&self, record: &Record) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(
            file,
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = self.write_record(record);
        }
    }

    fn flush(&self) {}
}

/// Appends `debug` and above log records from the parser and registry to
/// the file at `path`.
///
/// Fails with [`TagstyleError::Logger`](crate::TagstyleError::Logger) if a
/// logger has already been installed for this process.
pub fn init_logger(path: impl AsRef<Path>) -> Result<()> {
    let logger = FileLogger {
        path: path.as_ref().to_path_buf(),
        level: Level::Debug,
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}
