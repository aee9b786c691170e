//! # Output Module
//!
//! This module centralizes the user-facing banners and run results of the
//! headerguard binary. Per-file diagnostics go through the library
//! [`Logger`](headerguard::logging::Logger); everything printed around them
//! lives here.

use owo_colors::{OwoColorize, Stream};

use headerguard::report::ReportSummary;
use headerguard::verifier::VerificationSummary;

/// Symbols used in output
pub mod symbols {
  /// All files suitable
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// At least one unsuitable file
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Maximum number of files to show in the default output before truncating
const DEFAULT_FILE_LIST_LIMIT: usize = 20;

const BOX_WIDTH: usize = 73;

/// Version string with the git hash and commit date when they were available
/// at build time.
pub fn version_string() -> String {
  let version = env!("CARGO_PKG_VERSION");
  match (option_env!("GIT_HASH"), option_env!("GIT_DATE")) {
    (Some(hash), Some(date)) if !hash.is_empty() && !date.is_empty() => format!("{} ({} {})", version, hash, date),
    _ => version.to_string(),
  }
}

/// Lines of the welcome box.
fn welcome_lines(version: &str) -> Vec<String> {
  let border = "*".repeat(BOX_WIDTH);
  let inner = BOX_WIDTH - 4;
  let row = |text: &str| format!("* {:<inner$} *", text);

  vec![
    border.clone(),
    row(env!("CARGO_PKG_NAME")),
    row(&format!("Version: {}", version)),
    row("Checks that source files start with the expected legal header"),
    border,
  ]
}

pub fn print_welcome() {
  for line in welcome_lines(&version_string()) {
    println!("{}", line);
  }
}

pub fn print_bye() {
  println!("Execution completed, bye!");
}

pub fn print_version() {
  println!("Version: {}", version_string());
}

/// Prints a configuration error on stderr.
pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    "Error:".if_supports_color(Stream::Stderr, |s| s.red()),
    message
  );
}

pub fn print_start(folder: &str, header: &str, ignore_lines: usize) {
  println!(
    "Will look in folder '{}' for mention in file '{}' ignoring '{}' lines",
    folder, header, ignore_lines
  );
}

/// Lines listing the unsuitable files, sorted by path.
///
/// At most [`DEFAULT_FILE_LIST_LIMIT`] paths are listed unless `show_all`.
fn unsuitable_lines(summary: &VerificationSummary, show_all: bool) -> Vec<String> {
  let mut paths: Vec<&str> = summary.failures().map(|v| v.path.as_str()).collect();
  if paths.is_empty() {
    return Vec::new();
  }
  paths.sort_unstable();

  let count = paths.len();
  let limit = if show_all { count } else { DEFAULT_FILE_LIST_LIMIT };

  let mut lines = Vec::with_capacity(limit.min(count) + 2);
  lines.push(format!(
    "{} {} without the expected header:",
    count,
    if count == 1 { "file" } else { "files" }
  ));
  lines.extend(paths.iter().take(limit).map(|path| format!("  {}", path)));
  if count > limit {
    lines.push(format!("  ... and {} more (use --verbose to see all)", count - limit));
  }
  lines
}

pub fn print_unsuitable_files(summary: &VerificationSummary, show_all: bool) {
  let lines = unsuitable_lines(summary, show_all);
  let Some((first, rest)) = lines.split_first() else {
    return;
  };

  println!(
    "{} {}",
    symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
    first
  );
  for line in rest {
    println!("{}", line);
  }
}

/// Print the run summary.
///
/// Format: "Summary: X suitable, Y unsuitable, Z excluded"
/// With `--verbose`, also shows timing.
pub fn print_summary(summary: &ReportSummary, verbose: bool) {
  let unsuitable = if summary.unsuitable > 0 {
    summary
      .unsuitable
      .if_supports_color(Stream::Stdout, |s| s.red())
      .to_string()
  } else {
    summary
      .unsuitable
      .if_supports_color(Stream::Stdout, |s| s.cyan())
      .to_string()
  };

  let mut line = format!(
    "Summary: {} suitable, {} unsuitable, {} excluded",
    summary.suitable.if_supports_color(Stream::Stdout, |s| s.cyan()),
    unsuitable,
    summary.excluded.if_supports_color(Stream::Stdout, |s| s.dimmed())
  );

  if verbose {
    line.push_str(&format!(" ({:.2}s)", summary.processing_time.as_secs_f64()));
  }

  println!("{}", line);
}

pub fn print_success() {
  println!(
    "{} SUCCESS: All files contain the expected header",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
  );
}

pub fn print_failure() {
  println!(
    "{} FAILURE: There is at least one file without expected header",
    symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red())
  );
}
