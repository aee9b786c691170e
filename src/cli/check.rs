//! # Check Command
//!
//! This module implements the header check run: validation of the inputs,
//! the check itself, then the printed results and reports.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use headerguard::checker::{Checker, CheckerConfig, DEFAULT_EXTENSION_PATTERN};
use headerguard::exclusions::ExclusionSet;
use headerguard::logging::{ColorMode, LogConfig, Logger, init_tracing};
use headerguard::report::{FileReport, ReportFormat, ReportGenerator, ReportSummary};
use headerguard::verifier::{HeaderSpec, VerifierOptions};
use tracing::debug;

use super::ExitStatus;
use crate::error::ConfigError;
use crate::output::{
  print_bye, print_error, print_failure, print_start, print_success, print_summary, print_unsuitable_files,
};

/// Arguments for the check run
#[derive(Args, Debug)]
pub struct CheckArgs {
  /// Root folder containing the source files to check, processed recursively
  #[arg(long, value_name = "PATH")]
  pub folder: String,

  /// File holding the raw header to look for, without any comment glue like
  /// /** or //
  #[arg(long, value_name = "FILE")]
  pub header: String,

  /// Number of leading lines of each file to skip before the header
  #[arg(long, value_name = "N", allow_hyphen_values = true)]
  pub ignoring: String,

  /// File listing, one per line, the paths of files not to check. Paths are
  /// compared verbatim with the crawled ones ("<folder>/<relative path>")
  #[arg(long, value_name = "FILE")]
  pub excluding: Option<PathBuf>,

  /// List every found and processed file, and show all unsuitable files
  #[arg(long)]
  pub verbose: bool,

  /// Regular expression matched against file extensions
  #[arg(long, value_name = "REGEX", default_value = DEFAULT_EXTENSION_PATTERN)]
  pub extension: String,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,

  /// Warn when the line following the header is not a closing '*/' or '//'
  #[arg(long)]
  pub warn_unclosed: bool,

  /// Generate a JSON report of header status and save to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Generate a CSV report of header status and save to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_csv: Option<PathBuf>,
}

/// Validated inputs of a run.
struct CheckInputs {
  header: HeaderSpec,
  ignore_lines: usize,
  exclusions: ExclusionSet,
  checker: Checker,
}

impl CheckArgs {
  /// Validates the arguments and reads the input files, in the order the
  /// errors are reported.
  fn resolve(&self, logger: &Logger) -> Result<CheckInputs, ConfigError> {
    if self.folder.is_empty() {
      return Err(ConfigError::MissingFolder);
    }
    if !Path::new(&self.folder).exists() {
      return Err(ConfigError::FolderNotFound(PathBuf::from(&self.folder)));
    }

    if self.header.is_empty() {
      return Err(ConfigError::MissingHeader);
    }
    let header_path = Path::new(&self.header);
    if !header_path.exists() {
      return Err(ConfigError::HeaderNotFound(header_path.to_path_buf()));
    }
    let header_text = fs::read_to_string(header_path).map_err(|source| ConfigError::HeaderUnreadable {
      path: header_path.to_path_buf(),
      source,
    })?;

    let ignore_lines = self
      .ignoring
      .parse::<usize>()
      .map_err(|source| ConfigError::InvalidIgnoreCount {
        value: self.ignoring.clone(),
        source,
      })?;

    let exclusions = match &self.excluding {
      Some(path) => ExclusionSet::load(path)?,
      None => ExclusionSet::new(),
    };

    let checker = Checker::new(CheckerConfig {
      extension_pattern: self.extension.clone(),
      verifier: VerifierOptions {
        warn_unclosed_header: self.warn_unclosed,
        ..VerifierOptions::default()
      },
      logger: logger.clone(),
    })?;

    Ok(CheckInputs {
      header: HeaderSpec::parse(&header_text),
      ignore_lines,
      exclusions,
      checker,
    })
  }
}

/// Run the check with the given arguments
pub fn run_check(args: CheckArgs) -> ExitStatus {
  args.colors.apply();
  init_tracing(args.verbose);

  let logger = Logger::console(LogConfig { verbose: args.verbose });

  let inputs = match args.resolve(&logger) {
    Ok(inputs) => inputs,
    Err(e) => {
      print_error(&e.to_string());
      return ExitStatus::Error;
    }
  };

  debug!(
    "Header has {} lines, {} exclusions loaded",
    inputs.header.line_count(),
    inputs.exclusions.len()
  );

  print_start(&args.folder, &args.header, inputs.ignore_lines);

  let start_time = Instant::now();
  let summary = inputs
    .checker
    .check_with(&args.folder, &inputs.header, inputs.ignore_lines, &inputs.exclusions);
  let elapsed = start_time.elapsed();

  let file_reports = FileReport::from_summary(&summary);
  let report_summary = ReportSummary::from_reports(&file_reports, elapsed);

  println!();
  print_unsuitable_files(&summary, args.verbose);
  print_summary(&report_summary, args.verbose);

  if let Some(ref output_path) = args.report_json {
    write_report(ReportFormat::Json, output_path, &file_reports, &report_summary, &logger);
  }
  if let Some(ref output_path) = args.report_csv {
    write_report(ReportFormat::Csv, output_path, &file_reports, &report_summary, &logger);
  }

  let status = if summary.all_suitable() {
    print_success();
    ExitStatus::Success
  } else {
    print_failure();
    ExitStatus::Failure
  };
  print_bye();

  status
}

/// Writes one report. A failure is reported but does not change the verdict.
fn write_report(
  format: ReportFormat,
  output_path: &Path,
  files: &[FileReport],
  summary: &ReportSummary,
  logger: &Logger,
) {
  let report_generator = ReportGenerator::new(format, output_path);
  if let Err(e) = report_generator.generate(files, summary) {
    logger.error(format!("Error generating {} report: {:#}", format, e));
  } else {
    logger.info(format!("Generated {} report at {}", format, output_path.display()));
  }
}

#[cfg(test)]
mod tests {
  use std::error::Error as _;

  use tempfile::tempdir;

  use super::*;

  fn args(folder: &Path, header: &Path, ignoring: &str) -> CheckArgs {
    CheckArgs {
      folder: folder.to_string_lossy().to_string(),
      header: header.to_string_lossy().to_string(),
      ignoring: ignoring.to_string(),
      excluding: None,
      verbose: false,
      extension: DEFAULT_EXTENSION_PATTERN.to_string(),
      colors: ColorMode::Never,
      warn_unclosed: false,
      report_json: None,
      report_csv: None,
    }
  }

  #[test]
  fn test_resolve_reads_the_inputs() {
    let temp_dir = tempdir().unwrap();
    let header = temp_dir.path().join("HEADER.txt");
    fs::write(&header, "Copyright 2019 X\nMIT License\n").unwrap();

    let (logger, _) = Logger::capture(LogConfig::default());
    let inputs = match args(temp_dir.path(), &header, "3").resolve(&logger) {
      Ok(inputs) => inputs,
      Err(err) => panic!("unexpected error: {}", err),
    };
    assert_eq!(inputs.ignore_lines, 3);
    assert_eq!(inputs.header.line_count(), 2);
  }

  #[test]
  fn test_invalid_ignore_count_keeps_the_parse_error() {
    let temp_dir = tempdir().unwrap();
    let header = temp_dir.path().join("HEADER.txt");
    fs::write(&header, "Copyright 2019 X\n").unwrap();

    let (logger, _) = Logger::capture(LogConfig::default());
    for value in ["-1", "abc", ""] {
      match args(temp_dir.path(), &header, value).resolve(&logger) {
        Err(err @ ConfigError::InvalidIgnoreCount { .. }) => {
          assert!(err.to_string().contains(&format!("'{}'", value)));
          assert!(err.source().is_some_and(|source| source.is::<std::num::ParseIntError>()));
        }
        Err(err) => panic!("unexpected error: {}", err),
        Ok(_) => panic!("'{}' was accepted as an ignore count", value),
      }
    }
  }
}
