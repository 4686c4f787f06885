//! Command-line interface for the cleanplans launcher
//!
//! ## Module Structure
//!
//! - `args`: CLI argument definitions (clap)
//! - `run`: entry point, configuration, logging setup and error reporting

pub mod args;
mod run;

pub use args::Cli;
pub use run::run;
