//! Path primitives used by the analysis engine.
//!
//! # Key Concepts
//!
//! ## Expansion
//!
//! A raw segment may mention environment variables (`$NAME`, `${NAME}`) and
//! the home directory (`~`). [`expand::expand`] substitutes both, textually.
//!
//! ## Normalization
//!
//! The identity key of a segment is its canonical path when it exists on
//! disk and its lexical normalization otherwise. See
//! [`normalize::canonical_or_lexical`].
//!
//! ## Relationships
//!
//! [`PathRelationship`] compares two normalized paths component-wise. The
//! shadow analysis uses it to find earlier entries that contain later ones.
//!
//! ```
//! use pathdoc::path::PathRelationship;
//! use std::path::Path;
//!
//! let rel = PathRelationship::between(Path::new("/usr/local"), Path::new("/usr/local/bin"));
//! assert_eq!(rel, PathRelationship::Ancestor);
//! ```

pub mod expand;
pub mod normalize;
pub mod relationship;

pub use normalize::{join_segments, split_segments, SEPARATOR};
pub use relationship::PathRelationship;
