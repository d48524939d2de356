//! Heuristic classification of PATH directories.
//!
//! Classification maps a normalized directory to a [`Category`] and a short
//! human-readable reason. It is a pure function of the path and the
//! classifier's home directory: no filesystem access, no errors.
//!
//! The rules live in [`rules::RULES`] and are evaluated in order; the first
//! match wins. Anything the table does not recognize is
//! [`Category::Unknown`] with reason `no match`.
//!
//! # Examples
//!
//! ```
//! use pathdoc::classify::{Category, Classifier};
//!
//! let classifier = Classifier::with_home(None);
//!
//! let hit = classifier.classify("/opt/homebrew/Cellar/git/2.44.0/bin");
//! assert_eq!(hit.category(), Category::Homebrew);
//! assert_eq!(hit.reason(), "brew cellar");
//!
//! let miss = classifier.classify("/srv/tools");
//! assert_eq!(miss.category(), Category::Unknown);
//! assert_eq!(miss.reason(), "no match");
//! ```

pub mod rules;

use std::fmt;
use std::path::Path;

use serde::{Serialize, Serializer};

pub use rules::{Keyword, Rule, KEYWORD_BUCKETS, RULES};

/// Toolchain category of a PATH entry.
///
/// The declaration order is the display priority used when grouping a
/// snapshot, so `Ord` sorts System first and Other / Unknown last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Operating-system directories.
    System,
    /// Xcode and other developer tooling.
    Developer,
    /// Homebrew / Linuxbrew.
    Homebrew,
    /// Python interpreters and environment managers.
    Python,
    /// Node.js and its package managers.
    NodeJs,
    /// JVM toolchains.
    Java,
    /// Go toolchain and GOBIN.
    Go,
    /// Cargo and rustup.
    Rust,
    /// Ruby version managers.
    Ruby,
    /// Android SDK tools.
    Android,
    /// Cloud CLIs and infrastructure tools.
    CloudDevOps,
    /// Databricks CLI.
    Databricks,
    /// Database clients and servers.
    Databases,
    /// Dotfiles and per-user directories.
    UserLocal,
    /// Nothing matched.
    Unknown,
}

impl Category {
    /// All categories in priority order.
    pub const ALL: [Category; 15] = [
        Self::System,
        Self::Developer,
        Self::Homebrew,
        Self::Python,
        Self::NodeJs,
        Self::Java,
        Self::Go,
        Self::Rust,
        Self::Ruby,
        Self::Android,
        Self::CloudDevOps,
        Self::Databricks,
        Self::Databases,
        Self::UserLocal,
        Self::Unknown,
    ];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Developer => "Apple / Xcode / Developer",
            Self::Homebrew => "Homebrew",
            Self::Python => "Python",
            Self::NodeJs => "Node.js",
            Self::Java => "Java",
            Self::Go => "Go",
            Self::Rust => "Rust",
            Self::Ruby => "Ruby",
            Self::Android => "Android",
            Self::CloudDevOps => "Cloud / DevOps",
            Self::Databricks => "Databricks",
            Self::Databases => "Databases",
            Self::UserLocal => "Dotfiles / User Local",
            Self::Unknown => "Other / Unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Classifier output: a category and the reason it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    category: Category,
    reason: String,
}

impl Classification {
    /// Create a classification.
    pub fn new(category: Category, reason: impl Into<String>) -> Self {
        Self {
            category,
            reason: reason.into(),
        }
    }

    /// The category.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Why the category was chosen.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Evaluates [`RULES`] against normalized paths.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    home: Option<String>,
}

impl Classifier {
    /// Create a classifier that recognizes the current user's home directory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_home(home::home_dir().as_deref())
    }

    /// Create a classifier with an explicit home directory.
    ///
    /// A root or empty home is ignored, since every absolute path would
    /// contain it.
    #[must_use]
    pub fn with_home(home: Option<&Path>) -> Self {
        let home = home
            .map(|h| h.to_string_lossy().trim_end_matches(['/', '\\']).to_string())
            .filter(|h| !h.is_empty());
        Self { home }
    }

    /// Classify a normalized path.
    #[must_use]
    pub fn classify(&self, normalized: &str) -> Classification {
        let lower = normalized.to_lowercase();
        RULES
            .iter()
            .find_map(|rule| rule.evaluate(normalized, &lower, self.home.as_deref()))
            .unwrap_or_else(|| Classification::new(Category::Unknown, "no match"))
    }
}
