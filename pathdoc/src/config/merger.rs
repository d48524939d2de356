//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathdoc::config::{Config, ConfigMerger};
///
/// let low = Config { suggestion_limit: Some(2), ..Default::default() };
/// let high = Config { suggestion_limit: Some(5), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.suggestion_limit, Some(5));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources are sorted by precedence first, so the order they are passed
    /// in does not matter.
    #[must_use]
    pub fn merge(mut sources: Vec<ConfigSource>) -> Config {
        sources.sort_by_key(|s| s.precedence);

        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target. Fields set in `source` win.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.suggestion_limit.is_some() {
            target.suggestion_limit = source.suggestion_limit;
        }

        if source.log_dir.is_some() {
            target.log_dir.clone_from(&source.log_dir);
        }

        if source.action_log.is_some() {
            target.action_log = source.action_log;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.shell.is_some() {
            target.shell = source.shell;
        }

        if source.color.is_some() {
            target.color = source.color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{ColorMode, OutputFormat, ShellType};
    use std::path::PathBuf;

    fn make_source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("/config/{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_merge_empty_is_default() {
        assert_eq!(ConfigMerger::merge(Vec::new()), Config::default());
    }

    #[test]
    fn test_higher_precedence_wins() {
        let low = make_source(
            1,
            Config {
                suggestion_limit: Some(3),
                shell: Some(ShellType::Bash),
                ..Default::default()
            },
        );
        let high = make_source(
            2,
            Config {
                shell: Some(ShellType::Fish),
                ..Default::default()
            },
        );

        // Passed out of order on purpose
        let merged = ConfigMerger::merge(vec![high, low]);
        assert_eq!(merged.suggestion_limit, Some(3));
        assert_eq!(merged.shell, Some(ShellType::Fish));
    }

    #[test]
    fn test_none_does_not_clear() {
        let mut target = Config {
            log_dir: Some(PathBuf::from("/logs")),
            action_log: Some(false),
            output_format: Some(OutputFormat::Csv),
            color: Some(ColorMode::Never),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &Config::default());

        assert_eq!(target.log_dir, Some(PathBuf::from("/logs")));
        assert_eq!(target.action_log, Some(false));
        assert_eq!(target.output_format, Some(OutputFormat::Csv));
        assert_eq!(target.color, Some(ColorMode::Never));
    }

    #[test]
    fn test_every_field_overwrites() {
        let mut target = Config::default();
        let source = Config {
            suggestion_limit: Some(1),
            log_dir: Some(PathBuf::from("/elsewhere")),
            action_log: Some(true),
            output_format: Some(OutputFormat::Json),
            shell: Some(ShellType::Zsh),
            color: Some(ColorMode::Always),
        };
        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target, source);
    }
}
