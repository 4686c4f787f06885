use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

mod builder;
mod discovery;

pub use builder::ConfigBuilder;

/// Name of the config file looked up in the launcher directory
pub const CONFIG_FILE_NAME: &str = "cleanplans.toml";

/// Where an effective configuration value came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Cli,
    ConfigFile(PathBuf),
    Programmatic,
    Default,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cli => write!(f, "cli"),
            Self::ConfigFile(path) => write!(f, "config ({})", path.display()),
            Self::Programmatic => write!(f, "programmatic"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// `[launcher]` section of `cleanplans.toml`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LauncherSettings {
    /// Treat a non-zero companion exit as a launcher failure
    pub strict: bool,
    /// Copy the companion's stderr to the launcher's stderr
    pub forward_stderr: bool,
    /// Debug-level logging for the launcher crates
    pub verbose: bool,
}

/// Values taken from the command line.
///
/// `None` means "not given", letting the config file or defaults decide.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub strict: Option<bool>,
    pub forward_stderr: Option<bool>,
    pub verbose: Option<bool>,
}

/// Effective launcher configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub launcher: LauncherSettings,
    /// Config file that was loaded, if any
    pub config_file: Option<PathBuf>,
    pub source_attribution: HashMap<String, ConfigSource>,
}

impl Default for Config {
    fn default() -> Self {
        let source_attribution = ["strict", "forward_stderr", "verbose"]
            .into_iter()
            .map(|key| (key.to_string(), ConfigSource::Default))
            .collect();
        Self {
            launcher: LauncherSettings::default(),
            config_file: None,
            source_attribution,
        }
    }
}

impl Config {
    /// Effective values as `(key, value, source)` triples, sorted by key.
    #[must_use]
    pub fn effective_config(&self) -> Vec<(&'static str, String, String)> {
        let mut entries = vec![
            ("forward_stderr", self.launcher.forward_stderr.to_string()),
            ("strict", self.launcher.strict.to_string()),
            ("verbose", self.launcher.verbose.to_string()),
        ];
        entries.sort_by_key(|(key, _)| *key);
        entries
            .into_iter()
            .map(|(key, value)| {
                let source = self
                    .source_attribution
                    .get(key)
                    .unwrap_or(&ConfigSource::Default)
                    .to_string();
                (key, value, source)
            })
            .collect()
    }
}
