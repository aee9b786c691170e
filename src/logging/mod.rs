//! # Logging Module
//!
//! This module provides the logging capability handed to the crawler, the
//! verifier and the checker. There is no process-wide verbosity switch: each
//! component receives a [`Logger`] at construction and writes
//! [`LogRecord`]s through it.
//!
//! - Verbose records are dropped unless [`LogConfig::verbose`] is set
//! - Records go to a [`LogSink`], either the terminal ([`ConsoleSink`]) or an
//!   in-memory buffer ([`MemorySink`]) for tests
//!
//! Developer diagnostics (timings, per-step traces) go through `tracing`
//! instead and are controlled by `RUST_LOG`, see [`init_tracing`].
//!
//! ## Example
//!
//! ```rust
//! use headerguard::logging::{LogConfig, LogLevel, Logger};
//!
//! let (logger, sink) = Logger::capture(LogConfig { verbose: false });
//!
//! logger.info("Found 2 files with extension 'swift'");
//! logger.verbose("dropped, verbose mode is off");
//!
//! let records = sink.records();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].level, LogLevel::Info);
//! ```

mod modes;

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

pub use modes::{ColorMode, init_tracing};
use owo_colors::{OwoColorize, Stream};

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
  /// Detail only shown in verbose mode
  Verbose,
  /// Regular progress information
  Info,
  /// Something is off but the verdict is unaffected, or a file was rejected
  Warning,
  /// Something prevented the run
  Error,
}

/// A single message emitted by a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
  pub level: LogLevel,
  pub message: String,
}

/// Destination of log records.
pub trait LogSink: Send + Sync {
  /// Writes one record.
  fn write(&self, record: &LogRecord);
}

/// Sink printing to the terminal.
///
/// Verbose, info and warning records go to stdout, errors to stderr.
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
  fn write(&self, record: &LogRecord) {
    match record.level {
      LogLevel::Verbose | LogLevel::Info => println!("{}", record.message),
      LogLevel::Warning => println!("{}", record.message.if_supports_color(Stream::Stdout, |m| m.yellow())),
      LogLevel::Error => eprintln!(
        "{} {}",
        "Error:".if_supports_color(Stream::Stderr, |m| m.red()),
        record.message
      ),
    }
  }
}

/// Sink keeping every record in memory.
#[derive(Default)]
pub struct MemorySink {
  records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns a copy of the records written so far, oldest first.
  pub fn records(&self) -> Vec<LogRecord> {
    self.records.lock().unwrap_or_else(PoisonError::into_inner).clone()
  }

  /// Returns the messages written so far, oldest first.
  pub fn messages(&self) -> Vec<String> {
    self.records().into_iter().map(|r| r.message).collect()
  }
}

impl LogSink for MemorySink {
  fn write(&self, record: &LogRecord) {
    self
      .records
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .push(record.clone());
  }
}

/// Logging configuration shared by all components of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogConfig {
  /// Whether [`LogLevel::Verbose`] records are emitted
  pub verbose: bool,
}

/// Cheap-to-clone handle components log through.
#[derive(Clone)]
pub struct Logger {
  config: LogConfig,
  sink: Arc<dyn LogSink>,
}

impl Logger {
  /// Creates a logger writing to the given sink.
  pub fn new(config: LogConfig, sink: Arc<dyn LogSink>) -> Self {
    Self { config, sink }
  }

  /// Creates a logger writing to the terminal.
  pub fn console(config: LogConfig) -> Self {
    Self::new(config, Arc::new(ConsoleSink))
  }

  /// Creates a logger writing to a fresh [`MemorySink`], returned alongside
  /// so the records can be inspected.
  pub fn capture(config: LogConfig) -> (Self, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    (Self::new(config, sink.clone()), sink)
  }

  pub const fn config(&self) -> LogConfig {
    self.config
  }

  pub const fn is_verbose(&self) -> bool {
    self.config.verbose
  }

  /// Logs a message only shown in verbose mode.
  pub fn verbose(&self, message: impl fmt::Display) {
    if self.config.verbose {
      self.log(LogLevel::Verbose, message);
    }
  }

  pub fn info(&self, message: impl fmt::Display) {
    self.log(LogLevel::Info, message);
  }

  pub fn warn(&self, message: impl fmt::Display) {
    self.log(LogLevel::Warning, message);
  }

  pub fn error(&self, message: impl fmt::Display) {
    self.log(LogLevel::Error, message);
  }

  fn log(&self, level: LogLevel, message: impl fmt::Display) {
    self.sink.write(&LogRecord {
      level,
      message: message.to_string(),
    });
  }
}

impl Default for Logger {
  fn default() -> Self {
    Self::console(LogConfig::default())
  }
}

impl fmt::Debug for Logger {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Logger").field("config", &self.config).finish_non_exhaustive()
  }
}
