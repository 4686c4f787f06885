use std::io;
use std::path::PathBuf;
use thiserror::Error;

use cleanplans_runner::RunnerError;

use crate::exit_codes::ExitCode;

/// Errors surfaced by a launcher run.
///
/// A companion that is missing, not executable, or not shipped for this
/// platform at all is reported as [`LaunchFailed`](Self::LaunchFailed); the
/// wrapped [`RunnerError`] carries the detail.
///
/// | Exit Code | Error |
/// |-----------|-------|
/// | 1 | `LauncherDir`, `Io` |
/// | 65 | `OutputDecode` |
/// | 69 | `LaunchFailed` |
/// | 70 | `CompanionFailed` |
#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("Could not locate the launcher directory: {0}")]
    LauncherDir(#[source] io::Error),

    #[error("Launch failed: {0}")]
    LaunchFailed(#[source] RunnerError),

    #[error("Output decode failed: {0}")]
    OutputDecode(#[source] RunnerError),

    #[error("Companion {} exited with {}", companion.display(), describe_exit(*exit_code))]
    CompanionFailed {
        companion: PathBuf,
        exit_code: Option<i32>,
    },

    #[error("Failed to relay companion output: {0}")]
    Io(#[from] io::Error),
}

impl From<RunnerError> for LauncherError {
    fn from(err: RunnerError) -> Self {
        match err {
            RunnerError::InvalidOutputEncoding { .. } => Self::OutputDecode(err),
            RunnerError::LaunchFailed { .. } | RunnerError::UnsupportedPlatform { .. } => {
                Self::LaunchFailed(err)
            }
        }
    }
}

/// Human-readable form of a child exit status.
#[must_use]
pub fn describe_exit(exit_code: Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl LauncherError {
    /// Map this error to the launcher's exit code.
    #[must_use]
    pub fn to_exit_code(&self) -> ExitCode {
        match self {
            Self::LauncherDir(_) | Self::Io(_) => ExitCode::INTERNAL,
            Self::LaunchFailed(_) => ExitCode::LAUNCH_FAILED,
            Self::OutputDecode(_) => ExitCode::OUTPUT_DECODE,
            Self::CompanionFailed { .. } => ExitCode::COMPANION_FAILURE,
        }
    }

    /// Actionable hints shown under the error message.
    #[must_use]
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::LaunchFailed(RunnerError::UnsupportedPlatform { .. }) => vec![
                "cleanplans ships companion executables for Linux, Windows and macOS only"
                    .to_string(),
            ],
            Self::LaunchFailed(_) => vec![
                "Check that the cleanplans companion for this platform is installed next to the launcher"
                    .to_string(),
                "Ensure the companion file has execute permission".to_string(),
            ],
            Self::OutputDecode(_) => {
                vec!["The companion must write UTF-8 text on standard output".to_string()]
            }
            Self::CompanionFailed { .. } => vec![
                "Re-run with --forward-stderr to see the companion's diagnostics".to_string(),
            ],
            Self::LauncherDir(_) | Self::Io(_) => Vec::new(),
        }
    }

    /// Error message with suggestions, formatted for stderr.
    #[must_use]
    pub fn display_for_user(&self) -> String {
        let mut output = format!("Error: {self}\n");

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for suggestion in suggestions {
                output.push_str(&format!("  • {suggestion}\n"));
            }
        }

        output
    }
}
