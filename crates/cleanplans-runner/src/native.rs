//! Direct execution of the companion on the host

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Instant;

use tracing::debug;

use crate::command_spec::CommandSpec;
use crate::error::RunnerError;
use crate::process::{ProcessOutput, ProcessRunner};

/// Spawns the command directly with `std::process::Command`.
///
/// Stdin is closed, stdout and stderr are piped and read to the end, and the
/// call returns only once the child has exited.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeRunner;

impl NativeRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for NativeRunner {
    fn run(&self, cmd: &CommandSpec) -> Result<ProcessOutput, RunnerError> {
        let started = Instant::now();
        let output = cmd
            .to_command()
            .stdin(Stdio::null())
            .output()
            .map_err(|e| RunnerError::LaunchFailed {
                program: PathBuf::from(&cmd.program),
                reason: e.to_string(),
            })?;

        debug!(
            program = %cmd.program.to_string_lossy(),
            exit_code = ?output.status.code(),
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Child process exited"
        );

        Ok(ProcessOutput::new(
            output.stdout,
            output.stderr,
            output.status.code(),
        ))
    }
}
