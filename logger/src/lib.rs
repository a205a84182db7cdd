use chrono::Utc;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy)]
enum Color {
    Red,
    Yellow,
    Green,
    Cyan,
    White,
}

impl Color {
    fn to_ansi_code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[91m",
            Color::Yellow => "\x1b[93m",
            Color::Green => "\x1b[32m",
            Color::Cyan => "\x1b[36m",
            Color::White => "\x1b[37m",
        }
    }

    fn for_level(level: Level) -> Self {
        match level {
            Level::Error => Color::Red,
            Level::Warn => Color::Yellow,
            Level::Info => Color::Green,
            Level::Debug => Color::Cyan,
            Level::Trace => Color::White,
        }
    }
}

/// A `log` backend writing every record to a file and, optionally, to the
/// console with ANSI colours.
#[derive(Debug, Clone)]
pub struct Logger {
    log_file: PathBuf,
    level: LevelFilter,
    to_console: bool,
}

impl Logger {
    /// Creates a new `Logger` instance.
    ///
    /// # Parameters
    /// - `log_dir`: Directory where the log file is created. It must already exist.
    /// - `name`: Base name of the log file, written as `<name>.log`.
    /// - `level`: The most verbose level that gets recorded.
    /// - `to_console`: Whether records are echoed to stdout as well.
    ///
    /// The log file is truncated if it already exists.
    pub fn new(
        log_dir: &Path,
        name: &str,
        level: LevelFilter,
        to_console: bool,
    ) -> Result<Self, LoggerError> {
        if !log_dir.is_dir() {
            return Err(LoggerError::InvalidPath(log_dir.display().to_string()));
        }

        let sanitized_name = name.replace([':', '/', '\\', ' '], "_");
        let log_file = log_dir.join(format!("{}.log", sanitized_name));

        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&log_file)?;

        Ok(Logger {
            log_file,
            level,
            to_console,
        })
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    fn format(level: Level, target: &str, message: &str) -> String {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
        format!("[{}] [{}] {}: {}\n", level, timestamp, target, message)
    }

    fn write(&self, level: Level, target: &str, message: &str) -> Result<(), LoggerError> {
        let log_message = Self::format(level, target, message);

        if self.to_console {
            let color = Color::for_level(level);
            print!("{}{}\x1b[0m", color.to_ansi_code(), log_message);
            io::stdout().flush()?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)?;
        file.write_all(log_message.as_bytes())?;
        file.flush()?;

        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Err(e) = self.write(record.level(), record.target(), &record.args().to_string()) {
            eprintln!("Failed to write log record: {}", e);
        }
    }

    fn flush(&self) {}
}

/// Installs a [`Logger`] as the global `log` backend.
///
/// Returns the path of the log file. Fails if the directory is invalid or a
/// global logger was already installed.
pub fn init(
    log_dir: &Path,
    name: &str,
    level: LevelFilter,
    to_console: bool,
) -> Result<PathBuf, LoggerError> {
    let logger = Logger::new(log_dir, name, level, to_console)?;
    let log_file = logger.log_file.clone();
    log::set_boxed_logger(Box::new(logger)).map_err(|_| LoggerError::AlreadyInitialized)?;
    log::set_max_level(level);
    Ok(log_file)
}

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("I/O Error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid Path: {0} is not a directory")]
    InvalidPath(String),
    #[error("a global logger is already installed")]
    AlreadyInitialized,
}
