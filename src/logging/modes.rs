use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_TRACE_FILTER: &str = "headerguard=warn";

/// Filter used in verbose mode when `RUST_LOG` is not set.
const VERBOSE_TRACE_FILTER: &str = "headerguard=debug";

/// Enum representing the color mode options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
  /// Automatically determine whether to use colors based on TTY detection
  #[default]
  Auto,
  /// Never use colors
  Never,
  /// Always use colors
  Always,
}

impl ColorMode {
  /// Applies the mode to every colored write made through owo-colors.
  pub fn apply(self) {
    match self {
      ColorMode::Auto => owo_colors::unset_override(),
      ColorMode::Never => owo_colors::set_override(false),
      ColorMode::Always => owo_colors::set_override(true),
    }
  }
}

/// Installs the `tracing` subscriber used for developer diagnostics.
///
/// `RUST_LOG` wins when set. Otherwise only warnings are shown, or debug
/// events when `verbose` is true. Calling this twice is harmless.
pub fn init_tracing(verbose: bool) {
  let fallback = if verbose {
    VERBOSE_TRACE_FILTER
  } else {
    DEFAULT_TRACE_FILTER
  };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .try_init();
}
