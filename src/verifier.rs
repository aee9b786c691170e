//! # Verifier Module
//!
//! This module decides whether source files start with the expected header.
//!
//! A file is suitable when all of the following hold, checked in order:
//!
//! 1. it can be read as UTF-8 text
//! 2. it has more lines than the number of lines to ignore
//! 3. its first line opens a comment (`/**`, `/*` or `//`)
//! 4. once the ignored lines are skipped, at least as many lines remain in the
//!    header window (header length plus two lines of slack) as the header has;
//!    the empty segment after a final newline is not a line
//! 5. every header line matches the window line at the same index according
//!    to the [`LineMatchRule`]
//!
//! The first failing step rejects the file with a [`Rejection`]. Whether the
//! line following the header closes the comment is only ever an advisory, see
//! [`VerifierOptions::warn_unclosed_header`].
//!
//! Nothing in this module returns an error: every problem with a file turns
//! into a rejected [`FileVerdict`] and a log record.

use std::fs;
use std::path::Path;

use rayon::prelude::*;
use thiserror::Error;
use tracing::trace;

use crate::exclusions::ExclusionSet;
use crate::lines::{first_lines, is_closing_comment_line, is_opening_comment_line, line_count, normalize};
use crate::logging::Logger;

/// Number of lines read past the header length, leaving room for the line
/// closing the comment.
const WINDOW_SLACK: usize = 2;

/// The expected header, as raw lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSpec {
  lines: Vec<String>,
}

impl HeaderSpec {
  /// Splits a header template into lines.
  ///
  /// The template is raw text without comment markers. A trailing newline
  /// does not add an empty header line.
  pub fn parse(text: &str) -> Self {
    let lines = first_lines(text, line_count(text))
      .into_iter()
      .map(str::to_string)
      .collect();
    Self { lines }
  }

  pub fn lines(&self) -> &[String] {
    &self.lines
  }

  pub fn line_count(&self) -> usize {
    self.lines.len()
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }
}

/// How a header line is compared with the file line at the same index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineMatchRule {
  /// An empty file line is compared raw, so it only matches an empty header
  /// line. Any other file line matches when it is identical to the header
  /// line or equal to it after [`normalize`].
  #[default]
  Lenient,
  /// Both lines are always compared after [`normalize`]; an empty file line
  /// only matches a header line that normalizes to nothing.
  Strict,
}

impl LineMatchRule {
  pub fn matches(self, expected: &str, actual: &str) -> bool {
    match self {
      LineMatchRule::Lenient if actual.is_empty() => expected.is_empty(),
      LineMatchRule::Lenient => actual == expected || normalize(expected) == normalize(actual),
      LineMatchRule::Strict => normalize(expected) == normalize(actual),
    }
  }
}

/// Behavior switches of the verifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerifierOptions {
  pub match_rule: LineMatchRule,
  /// Log an advisory when the line after the header is not a comment closing
  /// token. Never changes a verdict.
  pub warn_unclosed_header: bool,
}

/// First line of a file that differs from the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
  /// 0-based index in the header (and in the window after ignored lines).
  /// Messages and reports show it 1-based, see [`Mismatch::line_number`].
  pub line_index: usize,
  pub expected: String,
  pub actual: String,
}

impl Mismatch {
  /// 1-based position of the mismatching line in the header.
  pub const fn line_number(&self) -> usize {
    self.line_index + 1
  }
}

/// Why a file was found unsuitable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
  #[error("cannot be read: {0}")]
  Unreadable(String),

  #[error("has {total} lines, not enough to ignore {ignored}")]
  NotEnoughLines { total: usize, ignored: usize },

  #[error("does not start with '/**', '/*' or '//'")]
  MissingOpeningComment,

  #[error("has {available} lines after the {ignored} ignored ones, the header needs {expected}")]
  WindowTooShort {
    available: usize,
    expected: usize,
    ignored: usize,
  },

  #[error("line {} does not match the header", .0.line_number())]
  Mismatch(Mismatch),
}

/// A suitable file, with the advisory computed for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Suitability {
  /// The line after the header is not a closing token. Only set when
  /// [`VerifierOptions::warn_unclosed_header`] is enabled.
  pub unclosed_header: bool,
}

/// Verdict on one candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileVerdict {
  pub path: String,
  pub outcome: Result<Suitability, Rejection>,
}

impl FileVerdict {
  pub const fn is_suitable(&self) -> bool {
    self.outcome.is_ok()
  }

  pub fn rejection(&self) -> Option<&Rejection> {
    self.outcome.as_ref().err()
  }

  pub fn mismatch(&self) -> Option<&Mismatch> {
    match self.rejection() {
      Some(Rejection::Mismatch(mismatch)) => Some(mismatch),
      _ => None,
    }
  }
}

/// Verdicts of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationSummary {
  /// Verdicts of the checked files, in candidate order
  pub verdicts: Vec<FileVerdict>,
  /// Candidates skipped because they are in the exclusion set
  pub excluded: Vec<String>,
}

impl VerificationSummary {
  /// Whether every checked file is suitable. True when nothing was checked.
  pub fn all_suitable(&self) -> bool {
    self.verdicts.iter().all(FileVerdict::is_suitable)
  }

  pub fn suitable_count(&self) -> usize {
    self.verdicts.iter().filter(|v| v.is_suitable()).count()
  }

  pub fn unsuitable_count(&self) -> usize {
    self.verdicts.len() - self.suitable_count()
  }

  pub fn failures(&self) -> impl Iterator<Item = &FileVerdict> {
    self.verdicts.iter().filter(|v| !v.is_suitable())
  }
}

/// Checks candidate files against a header.
pub struct HeaderVerifier {
  options: VerifierOptions,
  logger: Logger,
}

impl HeaderVerifier {
  pub const fn new(options: VerifierOptions, logger: Logger) -> Self {
    Self { options, logger }
  }

  pub const fn options(&self) -> VerifierOptions {
    self.options
  }

  /// Checks one file and logs the outcome. Returns whether it is suitable.
  pub fn verify(&self, path: &str, header: &HeaderSpec, ignore_lines: usize) -> bool {
    let verdict = self.inspect(path, header, ignore_lines);
    self.log_verdict(&verdict);
    verdict.is_suitable()
  }

  /// Checks one file without logging anything.
  pub fn inspect(&self, path: &str, header: &HeaderSpec, ignore_lines: usize) -> FileVerdict {
    let outcome = match fs::read_to_string(Path::new(path)) {
      Ok(content) => self.inspect_content(&content, header, ignore_lines),
      Err(e) => Err(Rejection::Unreadable(e.to_string())),
    };
    trace!("{}: {:?}", path, outcome);

    FileVerdict {
      path: path.to_string(),
      outcome,
    }
  }

  /// Runs the header checks on file content already in memory.
  pub fn inspect_content(
    &self,
    content: &str,
    header: &HeaderSpec,
    ignore_lines: usize,
  ) -> Result<Suitability, Rejection> {
    let total = line_count(content);
    if ignore_lines >= total {
      return Err(Rejection::NotEnoughLines {
        total,
        ignored: ignore_lines,
      });
    }

    if !is_opening_comment_line(content) {
      return Err(Rejection::MissingOpeningComment);
    }

    let expected = header.line_count();
    let window_end = ignore_lines.saturating_add(expected + WINDOW_SLACK).min(total);
    let window: Vec<&str> = first_lines(content, window_end)
      .into_iter()
      .skip(ignore_lines)
      .collect();
    if window.len() < expected {
      return Err(Rejection::WindowTooShort {
        available: window.len(),
        expected,
        ignored: ignore_lines,
      });
    }

    for (line_index, (wanted, actual)) in header.lines().iter().zip(&window).enumerate() {
      if !self.options.match_rule.matches(wanted, actual) {
        return Err(Rejection::Mismatch(Mismatch {
          line_index,
          expected: wanted.clone(),
          actual: (*actual).to_string(),
        }));
      }
    }

    let unclosed_header = self.options.warn_unclosed_header
      && !window
        .get(expected)
        .is_some_and(|line| is_closing_comment_line(line));

    Ok(Suitability { unclosed_header })
  }

  /// Checks every candidate not present in `exclusions`. Returns whether all
  /// of them are suitable.
  pub fn verify_all(
    &self,
    files: &[String],
    header: &HeaderSpec,
    ignore_lines: usize,
    exclusions: &ExclusionSet,
  ) -> bool {
    self
      .verify_all_detailed(files, header, ignore_lines, exclusions)
      .all_suitable()
  }

  /// Same as [`verify_all`](Self::verify_all) but returns every verdict.
  ///
  /// Files are checked in parallel; verdicts and log records still follow
  /// the order of `files`.
  pub fn verify_all_detailed(
    &self,
    files: &[String],
    header: &HeaderSpec,
    ignore_lines: usize,
    exclusions: &ExclusionSet,
  ) -> VerificationSummary {
    let (excluded, checked): (Vec<&String>, Vec<&String>) = files.iter().partition(|path| exclusions.contains(path));

    self.logger.verbose(format!("Will process {} files", checked.len()));

    let verdicts: Vec<FileVerdict> = checked
      .par_iter()
      .map(|path| self.inspect(path, header, ignore_lines))
      .collect();

    for verdict in &verdicts {
      self.logger.verbose(format!("Processing file '{}'", verdict.path));
      self.log_verdict(verdict);
    }

    VerificationSummary {
      verdicts,
      excluded: excluded.into_iter().cloned().collect(),
    }
  }

  fn log_verdict(&self, verdict: &FileVerdict) {
    match &verdict.outcome {
      Ok(suitability) => {
        if suitability.unclosed_header {
          self.logger.warn(format!(
            "The header of {} is not followed by a closing '*/' or '//' line",
            verdict.path
          ));
        }
      }
      Err(rejection) => {
        self
          .logger
          .warn(format!("The file {} {}, it is rejected", verdict.path, rejection));
        if let Rejection::Mismatch(mismatch) = rejection {
          self.logger.warn(format!(
            "\t - header line {}: '{}'",
            mismatch.line_number(),
            mismatch.expected
          ));
          self.logger.warn(format!(
            "\t - file line {}: '{}'",
            mismatch.line_number(),
            mismatch.actual
          ));
        }
      }
    }
  }
}
