//! Platform resolution and process execution for the cleanplans launcher
//!
//! Maps the host operating system to the companion executable shipped with the
//! launcher, and runs that executable synchronously with its output captured.
//!
//! # Security Model
//!
//! All process execution goes through [`CommandSpec`] to ensure argv-style invocation.
//! The input path is handed to the companion as one discrete argument and is never
//! interpreted by a shell.

pub mod command_spec;
pub mod error;
pub mod native;
pub mod platform;
pub mod process;

pub use command_spec::CommandSpec;
pub use error::RunnerError;
pub use native::NativeRunner;
pub use platform::Platform;
pub use process::{ProcessOutput, ProcessRunner};
