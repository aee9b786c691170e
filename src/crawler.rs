//! # Crawler Module
//!
//! Recursive discovery of candidate files under a root folder.

use std::path::Path;
use std::time::Instant;

use tracing::debug;
use walkdir::WalkDir;

use crate::file_filter::ExtensionFilter;
use crate::logging::Logger;

/// Lists the files under a folder whose extension matches a filter.
pub struct FolderCrawler {
  filter: ExtensionFilter,
  logger: Logger,
}

impl FolderCrawler {
  pub const fn new(filter: ExtensionFilter, logger: Logger) -> Self {
    Self { filter, logger }
  }

  pub const fn filter(&self) -> &ExtensionFilter {
    &self.filter
  }

  /// Walks `root` recursively and returns the matching entries.
  ///
  /// Each returned path is `root`, a `/`, then the entry path relative to
  /// `root`, so it can be compared textually with an exclusion list. Entries
  /// are matched on their extension only; a directory whose name carries a
  /// matching extension is returned too. The result is sorted so the output
  /// does not depend on the platform's enumeration order.
  ///
  /// A missing or unreadable root gives an empty list, unreadable
  /// sub-directories are skipped.
  pub fn crawl(&self, root: &str) -> Vec<String> {
    let start_time = Instant::now();
    let root_path = Path::new(root);

    let mut relative_paths: Vec<String> = WalkDir::new(root_path)
      .min_depth(1)
      .into_iter()
      .filter_map(|entry| match entry {
        Ok(entry) => Some(entry),
        Err(e) => {
          debug!("Skipping unreadable entry under {}: {}", root, e);
          None
        }
      })
      .filter(|entry| self.filter.matches(entry.path()))
      .filter_map(|entry| {
        entry
          .path()
          .strip_prefix(root_path)
          .ok()
          .map(|relative| relative.to_string_lossy().into_owned())
      })
      .collect();
    relative_paths.sort();

    self.logger.info(format!(
      "Found {} files with extension '{}'",
      relative_paths.len(),
      self.filter.pattern()
    ));

    let files: Vec<String> = relative_paths
      .into_iter()
      .map(|relative| {
        let path = format!("{}/{}", root, relative);
        self.logger.verbose(format!("Found file located at '{}'", path));
        path
      })
      .collect();

    debug!("Crawled {} in {}ms", root, start_time.elapsed().as_millis());

    files
  }
}
