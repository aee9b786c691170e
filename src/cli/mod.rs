//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing, but keeps the exit status in its own
//! hands: help, version and malformed command lines are mapped to an
//! [`Invocation`] instead of letting clap exit the process.

mod check;

use std::ffi::OsString;

pub use check::{CheckArgs, run_check};
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::error::ErrorKind;
use clap::{CommandFactory, Error, Parser};

use crate::output::{print_bye, print_error, print_version, print_welcome};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Check Swift sources, the header template being the first lines of the files
  headerguard --folder Sources --header HEADER.txt --ignoring 0

  # Skip the opening '/**' line of each file and check Objective-C sources too
  headerguard --folder . --header HEADER.txt --ignoring 1 --extension 'swift|m|h'

  # Do not check some generated files and list every processed file
  headerguard --folder Sources --header HEADER.txt --ignoring 0 --excluding exclusions.txt --verbose

  # Write a JSON report for the CI
  headerguard --folder Sources --header HEADER.txt --ignoring 0 --report-json headers.json

Exit status: 2 when all files carry the header, 1 when at least one does not,
0 after --help or --version, -1 for a malformed command line or unusable inputs.
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(flatten)]
  pub check_args: CheckArgs,
}

/// What the command line asks for.
#[derive(Debug)]
pub enum Invocation {
  /// Help was requested; holds the rendered help
  Help(Error),
  Version,
  Run(CheckArgs),
}

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
  /// Malformed command line or unusable inputs
  Error,
  /// Help or version printed, nothing checked
  Info,
  /// At least one file lacks the header
  Failure,
  /// Every checked file carries the header
  Success,
}

impl ExitStatus {
  pub const fn code(self) -> i32 {
    match self {
      Self::Error => -1,
      Self::Info => 0,
      Self::Failure => 1,
      Self::Success => 2,
    }
  }
}

/// Parses the command line without exiting on help, version or errors.
///
/// # Errors
///
/// Returns the clap error for unknown flags, missing required flags, missing
/// values and repeated flags. Help and version requests are errors too unless
/// the flag is the only argument.
pub fn parse_invocation<I, T>(args: I) -> Result<Invocation, Error>
where
  I: IntoIterator<Item = T>,
  T: Into<OsString> + Clone,
{
  let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
  let standalone = args.len() == 2;

  match Cli::try_parse_from(&args) {
    Ok(cli) => Ok(Invocation::Run(cli.check_args)),
    Err(err) => match err.kind() {
      ErrorKind::DisplayHelp | ErrorKind::DisplayVersion if !standalone => Err(Cli::command().error(
        ErrorKind::ArgumentConflict,
        "--help and --version must be the only argument",
      )),
      ErrorKind::DisplayHelp => Ok(Invocation::Help(err)),
      ErrorKind::DisplayVersion => Ok(Invocation::Version),
      _ => Err(err),
    },
  }
}

/// Runs the program for the given command line and returns its exit status.
pub fn run<I, T>(args: I) -> ExitStatus
where
  I: IntoIterator<Item = T>,
  T: Into<OsString> + Clone,
{
  print_welcome();

  match parse_invocation(args) {
    Ok(Invocation::Help(help)) => {
      let _ = help.print();
      print_bye();
      ExitStatus::Info
    }
    Ok(Invocation::Version) => {
      print_version();
      print_bye();
      ExitStatus::Info
    }
    Ok(Invocation::Run(check_args)) => run_check(check_args),
    Err(err) => {
      print_error("Command line not written as expected");
      let _ = err.print();
      print_bye();
      ExitStatus::Error
    }
  }
}
