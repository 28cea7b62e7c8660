use std::path::Path;

use narrative::{Config, RequirementTypes};
use tracing::instrument;

#[derive(Debug, clap::Parser)]
pub struct Init {
    /// Requirement types, from the broadest to the most specific
    #[arg(long, value_name = "TYPE", value_delimiter = ',', num_args = 1..)]
    types: Vec<String>,

    /// Baseline requirements level of the root
    #[arg(long, value_name = "N", default_value_t = 0)]
    level: usize,
}

impl Init {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let config_path = root.join(Config::RELATIVE_PATH);
        if config_path.exists() {
            anyhow::bail!(
                "Configuration already exists at {}",
                config_path.display()
            );
        }

        let types = if self.types.is_empty() {
            RequirementTypes::default()
        } else {
            let types = self.types.iter().map(|t| t.trim().to_lowercase());
            RequirementTypes::new(types)?
        };

        let mut config = Config::default().with_requirement_types(types.clone());
        config.requirements_level = self.level;
        config.save(&config_path)?;

        println!("Initialized narrative configuration in {}", root.display());
        println!("  Created: {}", Config::RELATIVE_PATH);
        println!("  Requirement types: {types}");

        Ok(())
    }
}
