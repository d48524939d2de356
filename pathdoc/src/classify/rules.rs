//! The classification table.
//!
//! [`RULES`] is evaluated top to bottom and the first rule that produces a
//! [`Classification`] wins. The order is part of the contract: prefix rules
//! are strictly more specific than keyword buckets, and keyword buckets are
//! tried in [`KEYWORD_BUCKETS`] order, so `/opt/google-cloud-sdk/bin` lands
//! in Go (via `/go`) before Android or Cloud / DevOps are ever consulted.

use std::sync::LazyLock;

use regex::Regex;

use super::{Category, Classification};

/// A needle in a keyword bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// A fixed substring.
    Literal(&'static str),
    /// The user's home directory, supplied to the classifier at construction.
    HomeDir,
}

/// One entry of the classification table.
#[derive(Debug)]
pub enum Rule {
    /// String-prefix match against a fixed set of directories.
    Prefix {
        /// Directory prefixes, compared case-sensitively.
        prefixes: &'static [&'static str],
        /// Category assigned on a match.
        category: Category,
        /// Reason recorded on a match.
        reason: &'static str,
    },

    /// Prefix match with a finer reason when a marker component is present.
    PrefixWithSubcase {
        /// Directory prefixes, compared case-sensitively.
        prefixes: &'static [&'static str],
        /// Category assigned on a match.
        category: Category,
        /// Lowercase substring that selects `marker_reason`.
        marker: &'static str,
        /// Reason when the marker is present.
        marker_reason: &'static str,
        /// Reason otherwise.
        reason: &'static str,
    },

    /// Case-insensitive substring search through [`KEYWORD_BUCKETS`].
    Keywords,

    /// Regular expression against the lowercased path.
    Pattern {
        /// Compiled pattern.
        regex: &'static LazyLock<Regex>,
        /// Category assigned on a match.
        category: Category,
        /// Reason recorded on a match.
        reason: &'static str,
    },
}

/// Operating-system directories.
pub const SYSTEM_PREFIXES: &[&str] = &[
    "/System",
    "/bin",
    "/sbin",
    "/usr/bin",
    "/usr/sbin",
    "/usr/libexec",
];

/// Developer tooling installs.
pub const DEV_PREFIXES: &[&str] = &["/Applications/Xcode.app", "/Library/Developer", "/Developer"];

/// Package-manager roots: Apple Silicon, Intel/legacy, and Linuxbrew.
pub const BREW_PREFIXES: &[&str] = &["/opt/homebrew", "/usr/local", "/home/linuxbrew/.linuxbrew"];

/// Ordered toolchain buckets.
pub const KEYWORD_BUCKETS: &[(Category, &[Keyword])] = &[
    (
        Category::Python,
        &[
            Keyword::Literal("pyenv"),
            Keyword::Literal("conda"),
            Keyword::Literal("anaconda"),
            Keyword::Literal("miniconda"),
            Keyword::Literal("venv"),
            Keyword::Literal("virtualenv"),
            Keyword::Literal("pipx"),
            Keyword::Literal("python"),
        ],
    ),
    (
        Category::NodeJs,
        &[
            Keyword::Literal("nvm"),
            Keyword::Literal("node"),
            Keyword::Literal("npm"),
            Keyword::Literal("yarn"),
            Keyword::Literal("pnpm"),
        ],
    ),
    (
        Category::Java,
        &[
            Keyword::Literal("java"),
            Keyword::Literal("jdk"),
            Keyword::Literal("jre"),
            Keyword::Literal("maven"),
            Keyword::Literal("gradle"),
        ],
    ),
    (
        Category::Go,
        &[
            Keyword::Literal("/go"),
            Keyword::Literal("gobin"),
            Keyword::Literal("golang"),
        ],
    ),
    (
        Category::Rust,
        &[
            Keyword::Literal("cargo"),
            Keyword::Literal(".cargo"),
            Keyword::Literal("rustup"),
        ],
    ),
    (
        Category::Ruby,
        &[
            Keyword::Literal("rbenv"),
            Keyword::Literal("rvm"),
            Keyword::Literal("ruby"),
            Keyword::Literal("bundler"),
        ],
    ),
    (
        Category::Android,
        &[Keyword::Literal("android"), Keyword::Literal("sdk")],
    ),
    (
        Category::UserLocal,
        &[
            Keyword::HomeDir,
            Keyword::Literal("~"),
            Keyword::Literal(".local"),
            Keyword::Literal(".dotfiles"),
        ],
    ),
    (
        Category::CloudDevOps,
        &[
            Keyword::Literal("aws"),
            Keyword::Literal("gcloud"),
            Keyword::Literal("google-cloud-sdk"),
            Keyword::Literal("azure"),
            Keyword::Literal("az"),
            Keyword::Literal("kubectl"),
            Keyword::Literal("helm"),
            Keyword::Literal("terraform"),
        ],
    ),
    (Category::Databricks, &[Keyword::Literal("databricks")]),
    (
        Category::Databases,
        &[
            Keyword::Literal("postgres"),
            Keyword::Literal("mysql"),
            Keyword::Literal("mariadb"),
            Keyword::Literal("mongo"),
            Keyword::Literal("redis"),
        ],
    ),
];

static NODE_VERSIONED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/versions/node/v\d+").expect("node pattern is valid"));

static PYTHON_VERSIONED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/python\d+(\.\d+)?/").expect("python pattern is valid"));

/// The classification table, in evaluation order.
pub static RULES: [Rule; 6] = [
    Rule::Prefix {
        prefixes: SYSTEM_PREFIXES,
        category: Category::System,
        reason: "system prefix",
    },
    Rule::Prefix {
        prefixes: DEV_PREFIXES,
        category: Category::Developer,
        reason: "developer tools prefix",
    },
    Rule::PrefixWithSubcase {
        prefixes: BREW_PREFIXES,
        category: Category::Homebrew,
        marker: "/cellar/",
        marker_reason: "brew cellar",
        reason: "brew prefix",
    },
    Rule::Keywords,
    Rule::Pattern {
        regex: &NODE_VERSIONED,
        category: Category::NodeJs,
        reason: "node versioned path",
    },
    Rule::Pattern {
        regex: &PYTHON_VERSIONED,
        category: Category::Python,
        reason: "python versioned path",
    },
];

impl Rule {
    /// Evaluate this rule.
    ///
    /// `lower` must be the lowercased form of `path`; `home` is the user's
    /// home directory, if known.
    #[must_use]
    pub fn evaluate(&self, path: &str, lower: &str, home: Option<&str>) -> Option<Classification> {
        match self {
            Self::Prefix {
                prefixes,
                category,
                reason,
            } => prefixes
                .iter()
                .any(|prefix| path.starts_with(prefix))
                .then(|| Classification::new(*category, *reason)),

            Self::PrefixWithSubcase {
                prefixes,
                category,
                marker,
                marker_reason,
                reason,
            } => {
                if !prefixes.iter().any(|prefix| path.starts_with(prefix)) {
                    return None;
                }
                let reason = if lower.contains(marker) {
                    marker_reason
                } else {
                    reason
                };
                Some(Classification::new(*category, *reason))
            }

            Self::Keywords => KEYWORD_BUCKETS.iter().find_map(|(category, needles)| {
                needles.iter().find_map(|needle| {
                    let hit = match needle {
                        Keyword::Literal(text) => lower.contains(&text.to_lowercase()).then_some(*text),
                        Keyword::HomeDir => home.filter(|h| lower.contains(&h.to_lowercase())),
                    }?;
                    Some(Classification::new(*category, format!("matched '{hit}'")))
                })
            }),

            Self::Pattern {
                regex,
                category,
                reason,
            } => regex
                .is_match(lower)
                .then(|| Classification::new(*category, *reason)),
        }
    }
}
