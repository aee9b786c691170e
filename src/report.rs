//! # Report Module
//!
//! This module contains functionality for generating reports of header
//! verification results in JSON and CSV formats.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use serde_json::{json, to_string_pretty};

use crate::verifier::{Mismatch, Rejection, VerificationSummary};

/// Report format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
  Json,
  Csv,
}

impl fmt::Display for ReportFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Json => write!(f, "json"),
      Self::Csv => write!(f, "csv"),
    }
  }
}

impl FromStr for ReportFormat {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "json" => Ok(Self::Json),
      "csv" => Ok(Self::Csv),
      _ => Err(format!("Unsupported report format: {}", s)),
    }
  }
}

/// Report entry for a single candidate file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
  /// Path as produced by the crawler
  pub path: String,
  /// Whether the file carries the header
  pub suitable: bool,
  /// Whether the file was skipped because of the exclusion list
  pub excluded: bool,
  /// Why the file was rejected
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reason: Option<String>,
  /// 1-based header line that did not match
  #[serde(skip_serializing_if = "Option::is_none")]
  pub mismatch_line: Option<usize>,
}

impl FileReport {
  /// Builds one report per candidate: checked files first, in candidate
  /// order, then excluded ones.
  pub fn from_summary(summary: &VerificationSummary) -> Vec<Self> {
    let checked = summary.verdicts.iter().map(|verdict| Self {
      path: verdict.path.clone(),
      suitable: verdict.is_suitable(),
      excluded: false,
      reason: verdict.rejection().map(Rejection::to_string),
      mismatch_line: verdict.mismatch().map(Mismatch::line_number),
    });

    let excluded = summary.excluded.iter().map(|path| Self {
      path: path.clone(),
      suitable: false,
      excluded: true,
      reason: None,
      mismatch_line: None,
    });

    checked.chain(excluded).collect()
  }
}

/// Totals of a verification run
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
  /// Total number of candidate files, excluded ones included
  pub total_files: usize,
  pub suitable: usize,
  pub unsuitable: usize,
  pub excluded: usize,
  /// Total processing time
  #[serde(skip_serializing)]
  pub processing_time: Duration,
  /// Processing time in seconds for serialization
  #[serde(rename = "processing_time_seconds")]
  pub processing_time_secs: f64,
  /// When the report was generated, RFC 3339
  pub generated_at: String,
}

impl ReportSummary {
  /// Create a ReportSummary from a collection of FileReports
  pub fn from_reports(files: &[FileReport], processing_time: Duration) -> Self {
    let excluded = files.iter().filter(|f| f.excluded).count();
    let suitable = files.iter().filter(|f| !f.excluded && f.suitable).count();

    Self {
      total_files: files.len(),
      suitable,
      unsuitable: files.len() - excluded - suitable,
      excluded,
      processing_time,
      processing_time_secs: processing_time.as_secs_f64(),
      generated_at: Local::now().to_rfc3339(),
    }
  }

  /// Whether every checked file is suitable.
  pub const fn all_suitable(&self) -> bool {
    self.unsuitable == 0
  }
}

/// Writes a report in one format to one path
pub struct ReportGenerator<'a> {
  format: ReportFormat,
  output_path: &'a Path,
}

impl<'a> ReportGenerator<'a> {
  pub const fn new(format: ReportFormat, output_path: &'a Path) -> Self {
    Self { format, output_path }
  }

  /// Generate a report and write it to the output path
  pub fn generate(&self, files: &[FileReport], summary: &ReportSummary) -> Result<()> {
    let content = match self.format {
      ReportFormat::Json => self.generate_json(files, summary)?,
      ReportFormat::Csv => self.generate_csv(files, summary),
    };

    fs::write(self.output_path, content)
      .with_context(|| format!("Failed to write {} report to {}", self.format, self.output_path.display()))?;

    Ok(())
  }

  fn generate_json(&self, files: &[FileReport], summary: &ReportSummary) -> Result<String> {
    let report = json!({
      "summary": summary,
      "files": files,
    });

    Ok(to_string_pretty(&report)?)
  }

  fn generate_csv(&self, files: &[FileReport], summary: &ReportSummary) -> String {
    let mut csv = String::new();

    csv.push_str("path,status,reason,mismatch_line\n");

    for file in files {
      let status = if file.excluded {
        "excluded"
      } else if file.suitable {
        "suitable"
      } else {
        "unsuitable"
      };
      let reason = file.reason.as_deref().unwrap_or("");
      let line = file.mismatch_line.map(|l| l.to_string()).unwrap_or_default();

      csv.push_str(&format!(
        "{},{},{},{}\n",
        csv_field(&file.path),
        status,
        csv_field(reason),
        line
      ));
    }

    csv.push_str("\n# Summary\n");
    csv.push_str(&format!("Total files,{}\n", summary.total_files));
    csv.push_str(&format!("Suitable,{}\n", summary.suitable));
    csv.push_str(&format!("Unsuitable,{}\n", summary.unsuitable));
    csv.push_str(&format!("Excluded,{}\n", summary.excluded));
    csv.push_str(&format!(
      "Processing time (seconds),{:.2}\n",
      summary.processing_time.as_secs_f64()
    ));
    csv.push_str(&format!("Generated on,{}\n", summary.generated_at));

    csv
  }
}

/// Quotes a CSV field when it holds a separator, a quote or a line break.
fn csv_field(value: &str) -> String {
  if value.contains([',', '"', '\n', '\r']) {
    format!("\"{}\"", value.replace('"', "\"\""))
  } else {
    value.to_string()
  }
}
