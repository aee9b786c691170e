//! # Exclusions Module
//!
//! This module handles the exclusion list: a plain text file naming, one per
//! line, the files that must not be checked.
//!
//! Entries are compared verbatim with the paths produced by the crawler. No
//! glob expansion and no path normalization take place, so an entry has to be
//! written exactly as the crawler reports the file (root folder as given on
//! the command line, then `/`, then the relative path).

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::lines::{normalize, split_lines};

/// Error returned when the exclusion list file cannot be read.
#[derive(Debug, Error)]
#[error("Failed to read exclusion list '{}': {source}", .path.display())]
pub struct ExclusionLoadError {
  pub path: PathBuf,
  #[source]
  pub source: std::io::Error,
}

/// Set of file paths exempt from header checking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
  paths: HashSet<String>,
}

impl ExclusionSet {
  /// An empty set, excluding nothing.
  pub fn new() -> Self {
    Self::default()
  }

  /// Builds the set from the content of an exclusion list.
  ///
  /// Lines that are blank once normalized are dropped, every other line is
  /// kept as written.
  pub fn parse(text: &str) -> Self {
    split_lines(text)
      .into_iter()
      .filter(|line| !normalize(line).is_empty())
      .collect()
  }

  /// Reads and parses an exclusion list file.
  pub fn load(path: &Path) -> Result<Self, ExclusionLoadError> {
    let content = fs::read_to_string(path).map_err(|source| ExclusionLoadError {
      path: path.to_path_buf(),
      source,
    })?;
    Ok(Self::parse(&content))
  }

  pub fn contains(&self, path: &str) -> bool {
    self.paths.contains(path)
  }

  pub fn len(&self) -> usize {
    self.paths.len()
  }

  pub fn is_empty(&self) -> bool {
    self.paths.is_empty()
  }

  /// Entries in lexicographic order.
  pub fn sorted_paths(&self) -> Vec<&str> {
    let mut paths: Vec<&str> = self.paths.iter().map(String::as_str).collect();
    paths.sort_unstable();
    paths
  }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
  fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
    Self {
      paths: iter.into_iter().map(Into::into).collect(),
    }
  }
}
