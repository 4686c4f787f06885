use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use cleanplans_utils::paths;

use super::{CONFIG_FILE_NAME, CliArgs, Config, ConfigSource};

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    launcher: Option<TomlLauncher>,
}

/// `[launcher]` as written in the file; absent keys do not override defaults
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlLauncher {
    strict: Option<bool>,
    forward_stderr: Option<bool>,
    verbose: Option<bool>,
}

impl Config {
    /// Discover and load configuration with precedence: CLI > file > defaults
    ///
    /// The default config file location is the launcher directory.
    pub fn discover(cli_args: &CliArgs) -> Result<Self> {
        let launcher_dir = paths::launcher_dir().context("Failed to locate launcher directory")?;
        Self::discover_from(&launcher_dir, cli_args)
    }

    /// Discover and load configuration using `launcher_dir` for the default
    /// config file lookup.
    pub fn discover_from(launcher_dir: &Path, cli_args: &CliArgs) -> Result<Self> {
        let mut config = Config::default();

        let config_path = match &cli_args.config_path {
            Some(explicit) => Some(explicit.clone()),
            None => Self::default_config_file(launcher_dir),
        };

        if let Some(path) = config_path {
            let file_config = Self::load_config_file(&path)
                .with_context(|| format!("Failed to load config file: {}", path.display()))?;
            if let Some(file_launcher) = file_config.launcher {
                let source = ConfigSource::ConfigFile(path.clone());
                if let Some(strict) = file_launcher.strict {
                    config.launcher.strict = strict;
                    config
                        .source_attribution
                        .insert("strict".to_string(), source.clone());
                }
                if let Some(forward_stderr) = file_launcher.forward_stderr {
                    config.launcher.forward_stderr = forward_stderr;
                    config
                        .source_attribution
                        .insert("forward_stderr".to_string(), source.clone());
                }
                if let Some(verbose) = file_launcher.verbose {
                    config.launcher.verbose = verbose;
                    config
                        .source_attribution
                        .insert("verbose".to_string(), source);
                }
            }
            config.config_file = Some(path);
        }

        if let Some(strict) = cli_args.strict {
            config.launcher.strict = strict;
            config
                .source_attribution
                .insert("strict".to_string(), ConfigSource::Cli);
        }
        if let Some(forward_stderr) = cli_args.forward_stderr {
            config.launcher.forward_stderr = forward_stderr;
            config
                .source_attribution
                .insert("forward_stderr".to_string(), ConfigSource::Cli);
        }
        if let Some(verbose) = cli_args.verbose {
            config.launcher.verbose = verbose;
            config
                .source_attribution
                .insert("verbose".to_string(), ConfigSource::Cli);
        }

        Ok(config)
    }

    /// `cleanplans.toml` in `launcher_dir`, if present.
    fn default_config_file(launcher_dir: &Path) -> Option<PathBuf> {
        let candidate = launcher_dir.join(CONFIG_FILE_NAME);
        candidate.is_file().then_some(candidate)
    }

    fn load_config_file(path: &Path) -> Result<TomlConfig> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let parsed: TomlConfig = toml::from_str(&content)
            .with_context(|| format!("Invalid TOML in {}", path.display()))?;
        Ok(parsed)
    }
}
