//! # Checker Module
//!
//! The [`Checker`] ties the crawler and the verifier together: it lists the
//! candidate files under a folder, then checks them against the header.

use thiserror::Error;
use tracing::debug;

use crate::crawler::FolderCrawler;
use crate::exclusions::ExclusionSet;
use crate::file_filter::{ExtensionFilter, InvalidPattern};
use crate::logging::Logger;
use crate::verifier::{HeaderSpec, HeaderVerifier, VerificationSummary, VerifierOptions};

/// Extension pattern used when none is configured.
pub const DEFAULT_EXTENSION_PATTERN: &str = "swift";

/// Error type for checker construction.
#[derive(Debug, Error)]
pub enum CheckerError {
  #[error(transparent)]
  InvalidPattern(#[from] InvalidPattern),
}

/// Configuration for creating a Checker instance.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
  /// Regular expression applied to file extensions, e.g. `swift|sh`
  pub extension_pattern: String,
  pub verifier: VerifierOptions,
  pub logger: Logger,
}

impl CheckerConfig {
  /// Creates a CheckerConfig with the given pattern and default options.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// CheckerConfig {
  ///     logger,
  ///     ..CheckerConfig::new("swift|sh")
  /// }
  /// ```
  pub fn new(extension_pattern: impl Into<String>) -> Self {
    Self {
      extension_pattern: extension_pattern.into(),
      verifier: VerifierOptions::default(),
      logger: Logger::default(),
    }
  }
}

impl Default for CheckerConfig {
  fn default() -> Self {
    Self::new(DEFAULT_EXTENSION_PATTERN)
  }
}

/// Looks for the expected header in every candidate file under a folder.
///
/// # Examples
///
/// ```rust,no_run
/// use headerguard::checker::{Checker, CheckerConfig};
///
/// # fn main() -> anyhow::Result<()> {
/// let checker = Checker::new(CheckerConfig::new("swift|sh"))?;
///
/// let header = std::fs::read_to_string("HEADER.txt")?;
/// let all_suitable = checker.check("Sources", &header, 1, "");
/// println!("all files suitable: {}", all_suitable);
/// # Ok(())
/// # }
/// ```
pub struct Checker {
  crawler: FolderCrawler,
  verifier: HeaderVerifier,
}

impl Checker {
  /// Creates a checker, compiling the extension pattern.
  ///
  /// # Errors
  ///
  /// Returns an error if the extension pattern is not a valid regular
  /// expression.
  pub fn new(config: CheckerConfig) -> Result<Self, CheckerError> {
    let filter = ExtensionFilter::new(&config.extension_pattern)?;
    debug!("Compiled extension pattern '{}'", filter.pattern());

    Ok(Self {
      crawler: FolderCrawler::new(filter, config.logger.clone()),
      verifier: HeaderVerifier::new(config.verifier, config.logger),
    })
  }

  pub const fn crawler(&self) -> &FolderCrawler {
    &self.crawler
  }

  pub const fn verifier(&self) -> &HeaderVerifier {
    &self.verifier
  }

  /// Checks every candidate file under `root`.
  ///
  /// `header_text` is the raw header template, `exclusion_list` the content
  /// of the exclusion list (empty when there is none). Returns whether all
  /// checked files are suitable; true when there is nothing to check.
  pub fn check(&self, root: &str, header_text: &str, ignore_lines: usize, exclusion_list: &str) -> bool {
    self
      .check_detailed(root, header_text, ignore_lines, exclusion_list)
      .all_suitable()
  }

  /// Same as [`check`](Self::check) but returns every verdict.
  pub fn check_detailed(
    &self,
    root: &str,
    header_text: &str,
    ignore_lines: usize,
    exclusion_list: &str,
  ) -> VerificationSummary {
    let header = HeaderSpec::parse(header_text);
    let exclusions = ExclusionSet::parse(exclusion_list);
    self.check_with(root, &header, ignore_lines, &exclusions)
  }

  /// Checks every candidate file under `root` with an already parsed header
  /// and exclusion set.
  pub fn check_with(
    &self,
    root: &str,
    header: &HeaderSpec,
    ignore_lines: usize,
    exclusions: &ExclusionSet,
  ) -> VerificationSummary {
    debug!(
      "Checking {} against a {}-line header, ignoring {} lines, {} exclusions",
      root,
      header.line_count(),
      ignore_lines,
      exclusions.len()
    );

    let files = self.crawler.crawl(root);
    self
      .verifier
      .verify_all_detailed(&files, header, ignore_lines, exclusions)
  }
}
