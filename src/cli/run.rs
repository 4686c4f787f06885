//! CLI entry point
//!
//! `run()` parses arguments, loads configuration, initializes logging and
//! drives one launcher invocation. It owns all error output.

use clap::Parser;
use std::io;
use tracing::debug;

use cleanplans_config::Config;
use cleanplans_utils::error::LauncherError;
use cleanplans_utils::exit_codes::ExitCode;
use cleanplans_utils::logging;

use super::args::Cli;
use crate::launcher::{Launcher, RelayPolicy};

/// Main CLI execution function.
///
/// Returns `Err(ExitCode)` after printing the error to stderr; `main` only maps
/// the code to the process exit status. A missing INPUT is reported by clap,
/// which exits with code 2 before anything else happens.
pub fn run() -> Result<(), ExitCode> {
    let cli = Cli::parse();

    let config = match Config::discover(&cli.to_cli_args()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return Err(ExitCode::CLI_ARGS);
        }
    };

    if let Err(e) = logging::init_tracing(config.launcher.verbose) {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    for (key, value, source) in config.effective_config() {
        debug!(key, value = %value, source = %source, "Effective configuration");
    }
    if !cli.ignored().is_empty() {
        debug!(ignored = ?cli.ignored(), "Ignoring arguments after INPUT");
    }

    launch(&cli, &config).map_err(|err| {
        eprint!("{}", err.display_for_user());
        err.to_exit_code()
    })
}

fn launch(cli: &Cli, config: &Config) -> Result<(), LauncherError> {
    let launcher = Launcher::native()?;
    debug!(
        platform = %launcher.platform(),
        launcher_dir = %launcher.launcher_dir().display(),
        "Resolved launcher location"
    );
    let invocation = launcher.invoke(cli.input())?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    invocation.relay(
        &mut stdout.lock(),
        &mut stderr.lock(),
        RelayPolicy::from(&config.launcher),
    )
}
