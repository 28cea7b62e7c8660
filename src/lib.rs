//! Plain-text Requirement Narratives
//!
//! Narratives are free-text files describing a capability, feature or story.
//! Their requirement type is inferred from where they sit in a directory tree
//! relative to a configured root.

pub mod domain;
pub use domain::{Config, Narrative, NarrativeFileKind, RequirementTypes};

/// Filesystem discovery and classification of narratives.
pub mod storage;
pub use storage::{NarrativeLocator, NarrativeTree, PathLevelResolver};
