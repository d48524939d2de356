//! Configuration system for pathdoc.
//!
//! Settings come from YAML files, environment variables and programmatic
//! overrides, merged field by field.
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`; the CLI
//!    passes its flags this way)
//! 2. Environment variables (`PATHDOC_*`)
//! 3. User config (`~/.pathdoc/config.yaml`, or an explicit file)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use pathdoc::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("suggestions per entry: {}", config.suggestion_limit());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, DEFAULT_SUGGESTION_LIMIT, MAX_SUGGESTION_LIMIT};
pub use validator::ConfigValidator;
