//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds the effective [`Config`] from defaults, the configuration file,
/// `PATHDOC_*` variables and programmatic overrides.
///
/// # Examples
///
/// ```
/// use pathdoc::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { suggestion_limit: Some(3), ..Default::default() })
///     .build()
///     .unwrap();
/// assert_eq!(config.suggestion_limit(), 3);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads the user file and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this file instead of `~/.pathdoc/config.yaml`. The file must exist.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `PATHDOC_*` variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` on top of every other source.
    ///
    /// Calling this more than once layers the overrides in call order.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        match self.overrides {
            Some(ref mut existing) => ConfigMerger::merge_into(existing, &config),
            None => self.overrides = Some(config),
        }
        self
    }

    /// Assemble and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be loaded, an
    /// environment variable is malformed, or the merged result is invalid.
    pub fn build(self) -> Result<Config> {
        let mut sources = Vec::new();
        if !self.skip_files {
            if let Some(source) = ConfigLoader::load_user_config(self.config_file.as_deref())? {
                sources.push(source);
            }
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        log::debug!("effective configuration: {config:?}");
        Ok(config)
    }
}
