//! Configuration for the cleanplans launcher
//!
//! Precedence: CLI > config file > defaults. The config file is looked up next
//! to the launcher executable, never in the working directory.

mod config;

pub use config::{CONFIG_FILE_NAME, CliArgs, Config, ConfigBuilder, ConfigSource, LauncherSettings};
