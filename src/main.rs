use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use divr::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the portfolio dataset (JSON array of customer records)
    #[arg(short, long, global = true)]
    dataset: Option<String>,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for divr::AppCommand {
    fn from(cmd: Commands) -> divr::AppCommand {
        match cmd {
            Commands::Clients => divr::AppCommand::Clients,
            Commands::Analyze { client_id, json } => divr::AppCommand::Analyze { client_id, json },
            Commands::Report => divr::AppCommand::Report,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List selectable client ids in the dataset
    Clients,
    /// Score one customer's portfolio diversification
    Analyze {
        /// Client id to analyze
        client_id: Option<String>,

        /// Emit the analysis result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score every customer in the dataset
    Report,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(),
        Some(cmd) => divr::run_command(cmd.into(), cli.dataset.as_deref(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

fn setup() -> anyhow::Result<()> {
    use anyhow::Context;

    let path = divr::config::AppConfig::default_config_path()?;

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let default_config = r#"---
# Default dataset to analyze (a JSON array of customer records)
# dataset_path: "/path/to/customers.json"

# Display currency when a customer record carries none
currency: "USD"
"#;

    std::fs::write(&path, default_config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
