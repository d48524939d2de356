//! Configuration validation.

use crate::config::schema::{Config, MAX_SUGGESTION_LIMIT};
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use pathdoc::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let zero = Config { suggestion_limit: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&zero).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(limit) = config.suggestion_limit {
            Self::validate_suggestion_limit(limit)?;
        }

        if let Some(ref dir) = config.log_dir {
            if dir.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "log_dir".into(),
                    message: "Log directory cannot be empty".into(),
                });
            }
        }

        Ok(())
    }

    fn validate_suggestion_limit(limit: usize) -> Result<()> {
        if limit == 0 || limit > MAX_SUGGESTION_LIMIT {
            return Err(Error::Validation {
                field: "suggestion_limit".into(),
                message: format!("Must be between 1 and {MAX_SUGGESTION_LIMIT}, got {limit}"),
            });
        }
        Ok(())
    }
}
