//! # File Filter Module
//!
//! This module contains the extension filter deciding which crawled entries
//! are candidate files.

use std::path::Path;

use regex::Regex;
use thiserror::Error;

/// Error returned when the extension pattern is not a valid regular
/// expression.
#[derive(Debug, Error)]
#[error("Invalid extension pattern '{pattern}': {source}")]
pub struct InvalidPattern {
  pub pattern: String,
  #[source]
  pub source: regex::Error,
}

/// Keeps entries whose extension matches a regular expression.
///
/// The pattern is applied to the text after the last `.` of the file name and
/// is not anchored: `swift|sh` keeps `main.swift` and `run.sh`, and `s` keeps
/// both as well. Entries without an extension never match.
///
/// ```
/// use std::path::Path;
///
/// use headerguard::file_filter::ExtensionFilter;
///
/// let filter = ExtensionFilter::new("swift|sh").unwrap();
/// assert!(filter.matches(Path::new("Sources/App/main.swift")));
/// assert!(!filter.matches(Path::new("README.md")));
/// ```
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
  regex: Regex,
}

impl ExtensionFilter {
  /// Compiles `pattern` into a filter.
  pub fn new(pattern: &str) -> Result<Self, InvalidPattern> {
    let regex = Regex::new(pattern).map_err(|source| InvalidPattern {
      pattern: pattern.to_string(),
      source,
    })?;
    Ok(Self { regex })
  }

  /// The source text of the pattern.
  pub fn pattern(&self) -> &str {
    self.regex.as_str()
  }

  /// Checks whether the extension of `path` matches the pattern.
  pub fn matches(&self, path: &Path) -> bool {
    path
      .extension()
      .map(|ext| self.regex.is_match(&ext.to_string_lossy()))
      .unwrap_or(false)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_alternation() {
    let filter = ExtensionFilter::new("swift|sh").unwrap();
    assert!(filter.matches(Path::new("a/b/main.swift")));
    assert!(filter.matches(Path::new("script.sh")));
    assert!(!filter.matches(Path::new("lib.rs")));
  }

  #[test]
  fn test_substring_match_is_enough() {
    let filter = ExtensionFilter::new("wif").unwrap();
    assert!(filter.matches(Path::new("main.swift")));
  }

  #[test]
  fn test_anchored_pattern() {
    let filter = ExtensionFilter::new("^h$").unwrap();
    assert!(filter.matches(Path::new("include/api.h")));
    assert!(!filter.matches(Path::new("include/api.hpp")));
  }

  #[test]
  fn test_only_last_extension_is_considered() {
    let filter = ExtensionFilter::new("^swift$").unwrap();
    assert!(!filter.matches(Path::new("main.swift.orig")));
    assert!(filter.matches(Path::new("archive.tar.swift")));
  }

  #[test]
  fn test_no_extension_never_matches() {
    let filter = ExtensionFilter::new("").unwrap();
    assert!(!filter.matches(Path::new("Makefile")));
    assert!(!filter.matches(Path::new(".gitignore")));
    assert!(filter.matches(Path::new("main.c")));
  }

  #[test]
  fn test_invalid_pattern() {
    let err = ExtensionFilter::new("swift(").unwrap_err();
    assert_eq!(err.pattern, "swift(");
    assert!(err.to_string().contains("Invalid extension pattern"));
  }
}
