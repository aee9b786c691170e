//! # Error Module
//!
//! Configuration errors of the binary. Any of them stops the run before the
//! folder is crawled and makes the process exit with the error status.

use std::path::PathBuf;

use headerguard::checker::CheckerError;
use headerguard::exclusions::ExclusionLoadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("The folder to process is undefined")]
  MissingFolder,

  #[error("The folder to process does not exist, please check its path: {}", .0.display())]
  FolderNotFound(PathBuf),

  #[error("The path containing the header content to look for is undefined")]
  MissingHeader,

  #[error("The file containing the header to look for does not exist, please check its path: {}", .0.display())]
  HeaderNotFound(PathBuf),

  #[error("Something bad occurred during header file read '{}': {source}", .path.display())]
  HeaderUnreadable {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("The number of lines to ignore is not well defined, '{value}' is not a positive or zero integer")]
  InvalidIgnoreCount {
    value: String,
    #[source]
    source: std::num::ParseIntError,
  },

  #[error(transparent)]
  Exclusions(#[from] ExclusionLoadError),

  #[error(transparent)]
  Checker(#[from] CheckerError),
}
