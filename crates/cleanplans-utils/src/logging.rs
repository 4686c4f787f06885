//! Structured logging for the launcher
//!
//! Diagnostics always go to stderr. Standard output belongs to the companion's
//! relayed text and nothing else may be written there.

use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use cleanplans_runner::{Platform, ProcessOutput};

use crate::error::describe_exit;

/// Bytes of companion stderr included in the non-zero exit warning.
pub const STDERR_LOG_TAIL_BYTES: usize = 2048;

const QUIET_DIRECTIVES: &str =
    "cleanplans_launcher=warn,cleanplans_runner=warn,cleanplans_utils=warn,cleanplans_config=warn,warn";
const VERBOSE_DIRECTIVES: &str = "cleanplans_launcher=debug,cleanplans_runner=debug,cleanplans_utils=debug,cleanplans_config=debug,info";

/// Check if colored log output should be used.
///
/// Returns true only if stderr is a terminal and `NO_COLOR` is not set.
fn use_color() -> bool {
    std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// Filter directives used when `RUST_LOG` is not set.
#[must_use]
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_DIRECTIVES
    } else {
        QUIET_DIRECTIVES
    }
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins when present; otherwise only warnings are shown, or debug
/// output for the launcher crates when `verbose` is set.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(verbose)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(use_color())
                .with_target(verbose)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_line_number(false)
                .with_file(false)
                .compact(),
        )
        .try_init()?;

    Ok(())
}

/// Log the resolved invocation before the companion is spawned.
pub fn log_invocation(platform: Platform, companion: &Path, input: &Path) {
    info!(
        platform = %platform,
        companion = %companion.display(),
        input = %input.display(),
        "Invoking companion"
    );
}

/// Log the outcome of a finished companion run.
///
/// A non-zero exit is a warning, with the tail of stderr attached, because the
/// relayed output alone does not reveal that the companion failed.
pub fn log_completion(companion: &Path, output: &ProcessOutput, duration_ms: u128) {
    if output.success() {
        debug!(
            companion = %companion.display(),
            exit_code = ?output.exit_code,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            duration_ms = %duration_ms,
            "Companion finished"
        );
    } else {
        warn!(
            companion = %companion.display(),
            exit_code = ?output.exit_code,
            stdout_bytes = output.stdout.len(),
            stderr = %output.stderr_tail(STDERR_LOG_TAIL_BYTES),
            duration_ms = %duration_ms,
            "Companion exited with {}",
            describe_exit(output.exit_code)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_directives(verbose)).is_ok());
        }
    }

    #[test]
    fn test_verbose_directives_enable_debug() {
        assert!(default_directives(true).contains("cleanplans_launcher=debug"));
        assert!(default_directives(false).contains("cleanplans_launcher=warn"));
    }

    #[test]
    fn test_log_helpers_without_subscriber() {
        let output = ProcessOutput::new(b"".to_vec(), b"boom\n".to_vec(), Some(1));
        log_invocation(
            Platform::Linux,
            Path::new("/opt/cleanplans/cleanplans_linux"),
            Path::new("in.svg"),
        );
        log_completion(Path::new("/opt/cleanplans/cleanplans_linux"), &output, 12);
    }
}
