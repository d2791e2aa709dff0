//! Logging infrastructure for caret.
//!
//! File-backed, level-filtered logging with a bounded in-memory tail.
//! The demo runs inside an alternate-screen terminal, so nothing may be
//! printed to stdout/stderr while it is active; log lines go to a file and
//! the most recent ones stay available in memory.

use std::collections::VecDeque;
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::{Mutex, OnceLock};

use chrono::Local;

/// Number of records kept in the in-memory tail.
const TAIL_CAPACITY: usize = 256;

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            _ => Err(format!("unknown log level: {s}")),
        }
    }
}

/// One formatted log record.
#[derive(Debug, Clone)]
pub struct Record {
    /// HH:MM:SS wall-clock timestamp.
    pub timestamp: String,
    pub level: Level,
    pub message: String,
}

#[derive(Debug)]
struct Sink {
    tail: VecDeque<Record>,
    min_level: Level,
    file_path: PathBuf,
}

impl Sink {
    fn new(file_path: PathBuf, min_level: Level) -> Self {
        if let Some(parent) = file_path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        // Start each run with a fresh file.
        if let Ok(mut file) = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)
        {
            let _ = writeln!(file, "--- caret log started ---");
        }

        Self {
            tail: VecDeque::new(),
            min_level,
            file_path,
        }
    }

    fn write(&mut self, level: Level, message: String) {
        if level < self.min_level {
            return;
        }

        let timestamp = Local::now().format("%H:%M:%S").to_string();

        if let Ok(mut file) = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.file_path)
        {
            let _ = writeln!(file, "[{}] {}: {}", timestamp, level.as_str(), message);
        }

        self.tail.push_back(Record {
            timestamp,
            level,
            message,
        });
        while self.tail.len() > TAIL_CAPACITY {
            self.tail.pop_front();
        }
    }
}

static SINK: OnceLock<Mutex<Sink>> = OnceLock::new();

/// Initialize the global logger.
///
/// Must be called once at startup before any logging call; later calls are
/// ignored. Truncates the log file.
pub fn init(file_path: PathBuf, min_level: Level) {
    SINK.get_or_init(|| Mutex::new(Sink::new(file_path, min_level)));
}

fn with_sink(level: Level, message: String) {
    let Some(sink) = SINK.get() else {
        return;
    };
    if let Ok(mut sink) = sink.lock() {
        sink.write(level, message);
    }
}

pub fn debug(message: impl Into<String>) {
    with_sink(Level::Debug, message.into());
}

pub fn info(message: impl Into<String>) {
    with_sink(Level::Info, message.into());
}

pub fn warn(message: impl Into<String>) {
    with_sink(Level::Warn, message.into());
}

pub fn error(message: impl Into<String>) {
    with_sink(Level::Error, message.into());
}

/// The most recent records, oldest first.
pub fn recent() -> Vec<Record> {
    match SINK.get().map(|sink| sink.lock()) {
        Some(Ok(sink)) => sink.tail.iter().cloned().collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parsing() {
        assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!("WARNING".parse::<Level>().unwrap(), Level::Warn);
        assert!("verbose".parse::<Level>().is_err());
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Warn < Level::Error);
    }

    // The sink is a process-wide singleton, so file output and filtering
    // are exercised in a single test.
    #[test]
    fn test_logging_writes_file_and_tail() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("caret.log");
        init(path.clone(), Level::Info);

        debug("filtered out");
        info("kept");

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("INFO: kept"));
        assert!(!contents.contains("filtered out"));

        let tail = recent();
        assert_eq!(tail.len(), 1);
        assert_eq!(tail[0].message, "kept");
    }
}
