//! Domain models for requirement narratives.
//!
//! This module contains the core domain types: the ordered requirement type
//! taxonomy, the loaded narrative, and configuration.

mod config;
pub use config::{Config, ConfigError};

/// Loaded narrative content.
pub mod narrative;
pub use narrative::{Narrative, NarrativeFileKind};

/// The ordered requirement type taxonomy.
pub mod requirement_types;
pub use requirement_types::{EmptyRequirementTypes, RequirementTypes};
