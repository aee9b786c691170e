//! # headerguard
//!
//! A tool that checks that every source file under a folder starts with the
//! expected legal header (copyright or license notice).
//!
//! The header template is raw text, without comment glue. A file is suitable
//! when, after skipping a given number of leading lines, it opens a comment
//! (`/**`, `/*` or `//`) and its lines match the template once whitespace and
//! slashes are ignored.
//!
//! ## Features
//!
//! * Recursive discovery of candidate files, filtered by a regular expression
//!   on their extension
//! * Exclusion list of files not to check
//! * Leading lines to ignore before the header, e.g. a shebang
//! * Diagnostics naming the first mismatching line
//! * JSON and CSV reports
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use headerguard::checker::{Checker, CheckerConfig};
//! use headerguard::logging::{LogConfig, Logger};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = CheckerConfig {
//!         logger: Logger::console(LogConfig { verbose: true }),
//!         ..CheckerConfig::new("swift|sh")
//!     };
//!     let checker = Checker::new(config)?;
//!
//!     let header = std::fs::read_to_string("HEADER.txt")?;
//!     let exclusions = std::fs::read_to_string("exclusions.txt").unwrap_or_default();
//!
//!     let summary = checker.check_detailed("Sources", &header, 0, &exclusions);
//!     for failure in summary.failures() {
//!         println!("{} lacks the header", failure.path);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`checker`] - Entry point tying discovery and verification together
//! * [`verifier`] - The header matching rules
//! * [`crawler`] and [`file_filter`] - Candidate file discovery
//! * [`exclusions`] - Exclusion list handling
//! * [`lines`] - Line splitting and normalization
//! * [`logging`] - Injected logger and terminal set-up
//! * [`report`] - JSON and CSV reports

pub mod checker;
pub mod crawler;
pub mod exclusions;
pub mod file_filter;
pub mod lines;
pub mod logging;
pub mod report;
pub mod verifier;
