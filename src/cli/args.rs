//! CLI argument definitions

use clap::Parser;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// cleanplans - run the bundled cleanplans binary for this platform on an SVG file
#[derive(Parser, Debug)]
#[command(name = "cleanplans-launcher")]
#[command(about = "Run the bundled cleanplans binary for this platform on an input file")]
#[command(long_about = r#"
Locates the cleanplans companion executable installed next to this launcher
(cleanplans_linux, cleanplans.exe or cleanplans_osx), runs it with INPUT as its
only argument, and prints the companion's standard output.

Options are only recognized before INPUT. INPUT may start with '-', and
everything after it is accepted and not forwarded.

EXAMPLES:
  cleanplans-launcher /tmp/drawing.svg
  cleanplans-launcher --strict --forward-stderr /tmp/drawing.svg > plan.gcode

CONFIGURATION:
  Precedence: CLI flags > config file > defaults
  The config file is cleanplans.toml in the launcher's directory, or --config PATH.
  RUST_LOG overrides the log filter; logs are written to stderr.
"#)]
#[command(version)]
pub struct Cli {
    /// Exit non-zero when the companion exits non-zero
    #[arg(long)]
    pub strict: bool,

    /// Copy the companion's stderr to this process's stderr
    #[arg(long)]
    pub forward_stderr: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// File handed to the companion executable; later arguments are ignored
    #[arg(
        value_name = "INPUT",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<OsString>,
}

impl Cli {
    /// The first positional argument, forwarded to the companion as-is.
    ///
    /// clap rejects a command line without it, so `args` is never empty here.
    #[must_use]
    pub fn input(&self) -> &Path {
        Path::new(&self.args[0])
    }

    /// Everything after INPUT, flags included.
    #[must_use]
    pub fn ignored(&self) -> &[OsString] {
        &self.args[1..]
    }

    /// Flags as configuration overrides. An unset flag leaves the decision to
    /// the config file.
    #[must_use]
    pub fn to_cli_args(&self) -> cleanplans_config::CliArgs {
        cleanplans_config::CliArgs {
            config_path: self.config.clone(),
            strict: self.strict.then_some(true),
            forward_stderr: self.forward_stderr.then_some(true),
            verbose: self.verbose.then_some(true),
        }
    }
}
