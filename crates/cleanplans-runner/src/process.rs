use crate::error::RunnerError;

use super::CommandSpec;

// ============================================================================
// ProcessRunner Trait - Process Execution Interface
// ============================================================================

/// Everything a finished child process left behind.
///
/// Both streams are buffered in full; nothing is forwarded while the child is
/// still running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Standard output from the process
    pub stdout: Vec<u8>,
    /// Standard error from the process
    pub stderr: Vec<u8>,
    /// Exit code from the process (None if terminated by signal)
    pub exit_code: Option<i32>,
}

impl ProcessOutput {
    #[must_use]
    pub fn new(stdout: Vec<u8>, stderr: Vec<u8>, exit_code: Option<i32>) -> Self {
        Self {
            stdout,
            stderr,
            exit_code,
        }
    }

    /// Decode stdout as UTF-8.
    ///
    /// Fails on the first invalid byte instead of substituting replacement
    /// characters, since the decoded text is relayed verbatim.
    pub fn stdout_text(&self) -> Result<&str, RunnerError> {
        std::str::from_utf8(&self.stdout).map_err(|e| RunnerError::InvalidOutputEncoding {
            valid_up_to: e.valid_up_to(),
        })
    }

    /// Last `max_bytes` of stderr, lossy decoded, for log lines.
    #[must_use]
    pub fn stderr_tail(&self, max_bytes: usize) -> String {
        let start = self.stderr.len().saturating_sub(max_bytes);
        String::from_utf8_lossy(&self.stderr[start..])
            .trim_end()
            .to_string()
    }

    /// Check if the process exited successfully (exit code 0).
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Trait for process execution.
///
/// Implementations MUST use argv-style APIs only (no shell string evaluation)
/// and MUST block until the child has exited. There is no timeout: a hung
/// child hangs the caller.
pub trait ProcessRunner {
    /// Execute `cmd` to completion and collect its output.
    ///
    /// # Returns
    ///
    /// * `Ok(ProcessOutput)` - The process ran (possibly with non-zero exit code)
    /// * `Err(RunnerError::LaunchFailed)` - The process could not be started
    fn run(&self, cmd: &CommandSpec) -> Result<ProcessOutput, RunnerError>;
}
