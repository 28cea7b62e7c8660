use std::path::PathBuf;

mod init;
mod resolve;
mod scan;
mod terminal;

use clap::ArgAction;
use init::Init;
use resolve::Resolve;
use scan::Scan;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the root of the requirements directory
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        // Narrative paths are absolute, so the root must be too for it to be
        // found within them.
        let root = std::path::absolute(&self.root)?;

        self.command
            .unwrap_or_else(|| Command::Scan(Scan::default()))
            .run(root)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// List every narrative below the root with its requirement type (default)
    Scan(Scan),

    /// Show the requirement type a path would be given
    ///
    /// The path does not need to exist.
    Resolve(Resolve),

    /// Write a configuration file
    Init(Init),
}

impl Command {
    fn run(self, root: PathBuf) -> anyhow::Result<()> {
        match self {
            Self::Scan(command) => command.run(&root)?,
            Self::Resolve(command) => command.run(root)?,
            Self::Init(command) => command.run(&root)?,
        }
        Ok(())
    }
}
