use std::collections::HashMap;

use super::{Config, ConfigSource, LauncherSettings};

impl Config {
    /// Create a builder for programmatic configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cleanplans_config::Config;
    ///
    /// let config = Config::builder().strict(true).build();
    /// assert!(config.launcher.strict);
    /// ```
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builds a [`Config`] without reading files or the command line.
///
/// Values set here are attributed to `ConfigSource::Programmatic`.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    strict: Option<bool>,
    forward_stderr: Option<bool>,
    verbose: Option<bool>,
}

impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = Some(strict);
        self
    }

    #[must_use]
    pub fn forward_stderr(mut self, forward_stderr: bool) -> Self {
        self.forward_stderr = Some(forward_stderr);
        self
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    #[must_use]
    pub fn build(self) -> Config {
        let mut source_attribution = HashMap::new();
        let mut resolve = |key: &str, value: Option<bool>| match value {
            Some(v) => {
                source_attribution.insert(key.to_string(), ConfigSource::Programmatic);
                v
            }
            None => {
                source_attribution.insert(key.to_string(), ConfigSource::Default);
                false
            }
        };

        let launcher = LauncherSettings {
            strict: resolve("strict", self.strict),
            forward_stderr: resolve("forward_stderr", self.forward_stderr),
            verbose: resolve("verbose", self.verbose),
        };

        Config {
            launcher,
            config_file: None,
            source_attribution,
        }
    }
}
