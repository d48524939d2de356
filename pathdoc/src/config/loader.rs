//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// File name of the user configuration inside `~/.pathdoc`.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// A loaded configuration file with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use pathdoc::config::ConfigLoader;
///
/// if let Some(source) = ConfigLoader::load_user_config(None).unwrap() {
///     println!("loaded {}", source.path.display());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the user configuration file.
    ///
    /// With `explicit`, that file is loaded and must exist. Otherwise
    /// `~/.pathdoc/config.yaml` is loaded if present.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing, or if a file exists
    /// but cannot be read or parsed.
    pub fn load_user_config(explicit: Option<&Path>) -> Result<Option<ConfigSource>> {
        let path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "configuration file not found".to_string(),
                    });
                }
                path.to_path_buf()
            }
            None => match Self::user_config_path() {
                Some(path) if path.is_file() => path,
                _ => return Ok(None),
            },
        };

        let config = Self::load_file(&path)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(Some(ConfigSource {
            path,
            precedence: 1,
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// Location of the user configuration file, if a home directory is known.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(".pathdoc").join(CONFIG_FILE_NAME))
    }
}
