//! Error types for runner module

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while launching the companion or reading its output
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Failed to launch {}: {reason}", program.display())]
    LaunchFailed { program: PathBuf, reason: String },

    #[error("No companion executable is shipped for platform '{os}'")]
    UnsupportedPlatform { os: String },

    #[error("Companion output is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    InvalidOutputEncoding { valid_up_to: usize },
}
