use std::{
    io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::domain::{EmptyRequirementTypes, RequirementTypes};

/// Configuration for narrative classification.
///
/// Stored as TOML in `.req/config.toml` under the requirements root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The requirement types, from the broadest to the most specific.
    ///
    /// For example `capability`, `feature`, `story`. A narrative's depth
    /// below the root selects its type from this list.
    requirement_types: Vec<String>,

    /// The baseline level of the requirements root.
    ///
    /// Non-zero when the root itself already sits some levels down the
    /// hierarchy.
    pub requirements_level: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            requirement_types: default_requirement_types(),
            requirements_level: 0,
        }
    }
}

impl Config {
    /// Location of the configuration file relative to the requirements root.
    pub const RELATIVE_PATH: &'static str = ".req/config.toml";

    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Loads the configuration for a requirements root, falling back to the
    /// defaults if there is no usable configuration file.
    #[must_use]
    pub fn load_or_default(root: &Path) -> Self {
        let path = root.join(Self::RELATIVE_PATH);
        Self::load(&path).unwrap_or_else(|e| {
            tracing::debug!("Failed to load config: {e}");
            Self::default()
        })
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// Parent directories are created if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        let write = |path: &Path| -> io::Result<()> {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)
        };
        write(path).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns the configured requirement types.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured list is empty.
    pub fn requirement_types(&self) -> Result<RequirementTypes, EmptyRequirementTypes> {
        RequirementTypes::new(self.requirement_types.iter().cloned())
    }

    /// Returns a copy of this configuration with different requirement types.
    #[must_use]
    pub fn with_requirement_types(&self, types: RequirementTypes) -> Self {
        Self {
            requirement_types: types.into(),
            ..self.clone()
        }
    }
}

fn default_requirement_types() -> Vec<String> {
    RequirementTypes::default().into()
}

/// Errors reading or writing the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        /// The file that was read.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },

    /// The file could not be written.
    #[error("failed to write config file {}: {source}", path.display())]
    Write {
        /// The file that was written.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },

    /// The file is not valid configuration.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_requirement_types")]
        requirement_types: Vec<String>,

        #[serde(default)]
        requirements_level: usize,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                requirement_types,
                requirements_level,
            } => Self {
                requirement_types,
                requirements_level,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            requirement_types: config.requirement_types,
            requirements_level: config.requirements_level,
        }
    }
}
