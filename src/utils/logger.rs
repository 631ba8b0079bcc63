//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation that works alongside
//! the standard log crate, but adds file output capabilities.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata, LevelFilter};

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level that is recorded
    level: LevelFilter,
}

impl Logger {
    /// Creates a new logger instance recording up to Info
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        Logger::with_level(log_file, LevelFilter::Info)
    }

    /// Creates a new logger with an explicit maximum level
    pub fn with_level(log_file: &str, level: LevelFilter) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level,
        })
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Records a grid in the log file under a heading, one row per line
    pub fn log_grid(&self, heading: &str, grid: &str) -> io::Result<()> {
        self.log(heading)?;
        for line in grid.lines() {
            self.log(&format!("  {}", line))?;
        }
        Ok(())
    }

    /// Static method to initialize the global logger
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the file receiving every log record
    /// * `verbose` - Record Debug messages as well as Info and above
    pub fn init_global_logger(log_file: &str, verbose: bool) -> io::Result<()> {
        let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
        let global_logger = Logger::with_level(log_file, level)?;

        // Only called once at startup
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
        Ok(())
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.log(&message);

            // Warnings and errors also reach the console
            if record.level() <= Level::Warn {
                eprintln!("{}", message);
            }
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_log_grid_writes_indented_rows() {
        let path = std::env::temp_dir().join("flowsteal_logger_test.log");
        let path_str = path.to_str().unwrap();
        let logger = Logger::new(path_str).unwrap();

        logger.log_grid("Grid 3:", "Aa\nbB").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Grid 3:\n  Aa\n  bB\n");
    }

    #[test]
    fn test_level_filter() {
        let path = std::env::temp_dir().join("flowsteal_logger_level.log");
        let logger = Logger::with_level(path.to_str().unwrap(), LevelFilter::Info).unwrap();

        let info = Metadata::builder().level(Level::Info).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(Log::enabled(&logger, &info));
        assert!(!Log::enabled(&logger, &debug));
    }
}
