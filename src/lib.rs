//! cleanplans launcher
//!
//! Host applications call the launcher with the path of an SVG file. It picks
//! the cleanplans companion executable built for the running OS from its own
//! install directory, runs it on that file, and prints what the companion wrote
//! to standard output.
//!
//! ```text
//! Platform::current() ─▶ launcher_dir() + companion name ─▶ spawn, wait ─▶ relay stdout
//! ```
//!
//! # Library use
//!
//! ```rust,no_run
//! use cleanplans_launcher::{Launcher, RelayPolicy};
//! use std::path::Path;
//!
//! let launcher = Launcher::native()?;
//! let invocation = launcher.invoke(Path::new("drawing.svg"))?;
//! invocation.relay(&mut std::io::stdout(), &mut std::io::stderr(), RelayPolicy::default())?;
//! # Ok::<(), cleanplans_launcher::LauncherError>(())
//! ```

pub mod cli;
pub mod launcher;

pub use cleanplans_config::{Config, ConfigBuilder};
pub use cleanplans_runner::{
    CommandSpec, NativeRunner, Platform, ProcessOutput, ProcessRunner, RunnerError,
};
pub use cleanplans_utils::error::LauncherError;
pub use cleanplans_utils::exit_codes::ExitCode;
pub use launcher::{Invocation, Launcher, RelayPolicy};
