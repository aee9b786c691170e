#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

/// Header used by most tests.
pub const HEADER: &str = "Copyright 2019 X\nMIT License\n";

/// A source file carrying [`HEADER`] in line comments.
pub const SUITABLE_SOURCE: &str = "// Copyright 2019 X\n// MIT License\npackage main\n";

/// A source file without any header.
pub const UNSUITABLE_SOURCE: &str = "package main\n";

/// A temporary project: sources live under `Sources/`, the header template and
/// the exclusion list next to it.
pub struct Project {
  dir: TempDir,
}

impl Project {
  pub fn new() -> Result<Self> {
    let dir = tempfile::tempdir()?;
    fs::create_dir_all(dir.path().join("Sources"))?;
    Ok(Self { dir })
  }

  pub fn root(&self) -> &Path {
    self.dir.path()
  }

  /// The sources folder, as the string handed to the checker.
  pub fn sources(&self) -> String {
    self.dir.path().join("Sources").to_string_lossy().into_owned()
  }

  /// Path the crawler reports for a file under `Sources/`.
  pub fn crawled_path(&self, relative: &str) -> String {
    format!("{}/{}", self.sources(), relative)
  }

  /// Writes a file under `Sources/`, creating parent folders.
  pub fn source(&self, relative: &str, content: &str) -> Result<PathBuf> {
    let path = self.dir.path().join("Sources").join(relative);
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
  }

  /// Writes the header template and returns its path.
  pub fn header(&self, content: &str) -> Result<PathBuf> {
    let path = self.dir.path().join("HEADER.txt");
    fs::write(&path, content)?;
    Ok(path)
  }

  /// Writes an exclusion list naming the given paths, one per line.
  pub fn exclusions(&self, paths: &[String]) -> Result<PathBuf> {
    let path = self.dir.path().join("exclusions.txt");
    fs::write(&path, paths.join("\n"))?;
    Ok(path)
  }
}
