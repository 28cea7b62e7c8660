use std::{fmt, path::Path};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use narrative::{Config, NarrativeLocator, NarrativeTree, PathLevelResolver};
use tracing::instrument;

use crate::cli::terminal::Colorize;

/// Command arguments for `req-narrative scan`.
#[derive(Debug, Default, Parser)]
pub struct Scan {
    /// Baseline requirements level of the root (defaults to the configured
    /// level).
    #[arg(long, value_name = "N")]
    level: Option<usize>,

    /// Output format (default: table).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::Table => "table",
            Self::Json => "json",
        };
        f.write_str(value)
    }
}

impl Scan {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let config = Config::load_or_default(root);
        let types = config.requirement_types()?;
        let level = self.level.unwrap_or(config.requirements_level);

        let locator = NarrativeLocator::new(PathLevelResolver::new(root.to_path_buf(), types));
        let tree = NarrativeTree::scan(root, &locator, level);

        match self.output {
            OutputFormat::Table => render_table(&tree, root),
            OutputFormat::Json => {
                serde_json::to_writer_pretty(std::io::stdout(), tree.entries())
                    .context("failed to render json output")?;
                println!();
            }
        }

        Ok(())
    }
}

fn render_table(tree: &NarrativeTree, root: &Path) {
    if tree.is_empty() {
        println!("{}", "No narratives found.".dim());
        return;
    }

    let width = tree
        .entries()
        .iter()
        .map(|entry| entry.narrative.requirement_type().len())
        .max()
        .unwrap_or_default();

    for entry in tree.entries() {
        let narrative = &entry.narrative;
        let path = narrative.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let requirement_type = format!("{:<width$}", narrative.requirement_type());

        println!(
            "{}  {}  {}",
            requirement_type.info(),
            relative.display(),
            narrative.title().unwrap_or_default().dim()
        );
    }

    println!();
    println!("{}", format!("{} narratives", tree.len()).success());
}
